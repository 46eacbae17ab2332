//! Consistency checks on suitcase states.
//!
//! Used in `debug_assert!` blocks and tests.

use rustc_hash::FxHashMap;

use crate::item::Item;
use crate::suitcase::Suitcase;

/// Cached areas match the item sequences, the packed area stays within
/// capacity and no packed item is longer than the suitcase.
pub fn suitcase_is_consistent(suitcase: &Suitcase) -> bool {
    let packed_sum: u64 = suitcase.packed_items().iter().map(Item::area).sum();
    let unpacked_sum: u64 = suitcase.unpacked_items().iter().map(Item::area).sum();

    packed_sum == suitcase.area_packed()
        && unpacked_sum == suitcase.area_unpacked()
        && packed_sum <= suitcase.capacity()
        && suitcase
            .packed_items()
            .iter()
            .all(|item| item.width() <= suitcase.width() && item.height() <= suitcase.height())
}

/// `later` descends from `earlier` by packing zero or more items:
/// same dimensions, `earlier`'s packed items are a prefix of `later`'s, and
/// both hold the same multiset of items.
pub fn is_successor_of(earlier: &Suitcase, later: &Suitcase) -> bool {
    earlier.width() == later.width()
        && earlier.height() == later.height()
        && later.packed_items().starts_with(earlier.packed_items())
        && later.area_packed() >= earlier.area_packed()
        && same_items(earlier, later)
}

/// Both suitcases partition the same multiset of items.
pub fn same_items(a: &Suitcase, b: &Suitcase) -> bool {
    item_counts(a) == item_counts(b)
}

fn item_counts(suitcase: &Suitcase) -> FxHashMap<&Item, usize> {
    let mut counts = FxHashMap::default();
    for item in suitcase.unpacked_items().iter().chain(suitcase.packed_items()) {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}
