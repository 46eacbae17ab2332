//! Property-based tests for the packing strategies.
//!
//! Random suitcases are small enough that every subset of items can be
//! enumerated, which gives an exact reference for the optimal strategy.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use suitcase::assertions::{is_successor_of, suitcase_is_consistent};
use suitcase::item::Item;
use suitcase::packing::{greedy_packing, optimal_packing, rushed_packing};
use suitcase::random::{randomly_pack, randomly_pack_partial};
use suitcase::suitcase::Suitcase;
use suitcase::Strategy as PackingStrategy;

/// Suitcases up to 8x8 holding up to 7 items of side at most 6.
fn suitcase_strategy() -> impl Strategy<Value = Suitcase> {
    (
        1u32..=8,
        1u32..=8,
        prop::collection::vec((1u32..=6, 1u32..=6), 0..=7),
    )
        .prop_map(|(width, height, sides)| {
            let items = sides
                .into_iter()
                .enumerate()
                .map(|(i, (w, h))| Item::new(format!("Item{i}"), w, h).unwrap())
                .collect();
            Suitcase::new(width, height, items).unwrap()
        })
}

/// Largest total area of any subset of the unpacked items that fits at once.
fn best_subset_area(suitcase: &Suitcase) -> u64 {
    let items = suitcase.unpacked_items();
    let fits_alone: Vec<&Item> = items
        .iter()
        .filter(|item| item.width() <= suitcase.width() && item.height() <= suitcase.height())
        .collect();

    (0u32..(1 << fits_alone.len()))
        .map(|mask| {
            fits_alone
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, item)| item.area())
                .sum::<u64>()
        })
        .filter(|&area| area <= suitcase.remaining_capacity())
        .max()
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn strategies_partition_items_and_terminate(suitcase in suitcase_strategy()) {
        for strategy in PackingStrategy::ALL {
            let result = strategy.pack(suitcase.clone());
            prop_assert!(is_successor_of(&suitcase, &result), "{} lost or duplicated items", strategy);
            prop_assert!(suitcase_is_consistent(&result));
            prop_assert!(result.area_packed() <= result.capacity());
            prop_assert!(!result.can_pack_any(), "{} stopped early", strategy);
        }
    }

    #[test]
    fn strategies_are_idempotent(suitcase in suitcase_strategy()) {
        for strategy in PackingStrategy::ALL {
            let once = strategy.pack(suitcase.clone());
            prop_assert_eq!(strategy.pack(once.clone()), once);
        }
    }

    #[test]
    fn optimal_matches_best_subset(suitcase in suitcase_strategy()) {
        let optimal = optimal_packing(suitcase.clone());
        prop_assert_eq!(optimal.area_packed(), best_subset_area(&suitcase));
    }

    #[test]
    fn optimal_is_never_beaten(suitcase in suitcase_strategy(), seed in any::<u64>()) {
        let optimal = optimal_packing(suitcase.clone()).area_packed();
        prop_assert!(rushed_packing(suitcase.clone()).area_packed() <= optimal);
        prop_assert!(greedy_packing(suitcase.clone()).area_packed() <= optimal);

        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..20 {
            prop_assert!(randomly_pack(&suitcase, &mut rng).area_packed() <= optimal);
            prop_assert!(randomly_pack_partial(&suitcase, &mut rng).area_packed() <= optimal);
        }
    }

    #[test]
    fn area_never_decreases_while_packing(suitcase in suitcase_strategy(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut current = suitcase;
        while current.can_pack_any() {
            let next = randomly_pack_partial(&current, &mut rng);
            prop_assert!(next.area_packed() >= current.area_packed());
            prop_assert!(is_successor_of(&current, &next));
            current = next;
        }
    }
}
