//! Suitcase Packing Library
//!
//! Decides which rectangular items go into a fixed-size suitcase. The
//! suitcase only tracks an area budget, and three strategies choose what to
//! pack: rushed (first fit, in order), greedy (largest first) and optimal
//! (exhaustive branch and bound maximizing the packed area).

pub mod assertions;
pub mod config;
pub mod error;
pub mod item;
pub mod packing;
pub mod persistence;
pub mod random;
pub mod suitcase;

use std::fmt;

use serde::{Deserialize, Serialize};

use packing::OptimalSearch;
use suitcase::Suitcase;

/// A packing strategy, selectable at runtime.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// First item that fits, in input order.
    Rushed,
    /// Largest item that fits.
    Greedy,
    /// Greatest packed area over all packing orders.
    Optimal,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Rushed, Strategy::Greedy, Strategy::Optimal];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Rushed => "rushed",
            Strategy::Greedy => "greedy",
            Strategy::Optimal => "optimal",
        }
    }

    /// Runs this strategy to completion.
    pub fn pack(self, suitcase: Suitcase) -> Suitcase {
        self.pack_with(suitcase, &OptimalSearch::default())
    }

    /// Runs this strategy, using `search` when it is [`Strategy::Optimal`].
    pub fn pack_with(self, suitcase: Suitcase, search: &OptimalSearch) -> Suitcase {
        match self {
            Strategy::Rushed => packing::rushed_packing(suitcase),
            Strategy::Greedy => packing::greedy_packing(suitcase),
            Strategy::Optimal => search.run(suitcase).suitcase,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
