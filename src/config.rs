use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::packing::OptimalSearch;
use crate::Strategy;

/// Configuration for a packing run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PackingConfig {
    /// Strategies to run, in this order
    pub strategies: Vec<Strategy>,
    /// Seed for the PRNG. If undefined, random generation uses entropy
    pub prng_seed: Option<u64>,
    /// Node budget of the optimal search. If undefined, the search is exhaustive
    pub max_search_nodes: Option<u64>,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            strategies: Strategy::ALL.to_vec(),
            prng_seed: Some(0),
            max_search_nodes: None,
        }
    }
}

impl PackingConfig {
    pub fn rng(&self) -> SmallRng {
        match self.prng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }

    pub fn optimal_search(&self) -> OptimalSearch {
        OptimalSearch {
            max_nodes: self.max_search_nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: PackingConfig = serde_json::from_str(r#"{"max_search_nodes": 1000}"#).unwrap();
        assert_eq!(config.strategies, Strategy::ALL.to_vec());
        assert_eq!(config.prng_seed, Some(0));
        assert_eq!(config.optimal_search(), OptimalSearch::with_max_nodes(1000));
    }

    #[test]
    fn test_strategies_are_lowercase() {
        let config: PackingConfig =
            serde_json::from_str(r#"{"strategies": ["optimal", "rushed"], "prng_seed": null}"#)
                .unwrap();
        assert_eq!(config.strategies, vec![Strategy::Optimal, Strategy::Rushed]);
        assert_eq!(config.prng_seed, None);
    }
}
