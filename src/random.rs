//! Random instances and random packings.
//!
//! Random packings are valid but arbitrary, which makes them a cheap
//! baseline: no random packing may ever beat
//! [`optimal_packing`](crate::packing::optimal_packing).

use std::num::NonZeroU32;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::item::Item;
use crate::suitcase::Suitcase;

/// Generates `count` items named `Item0`, `Item1`, ... with sides drawn
/// uniformly from `1..=max_side`.
pub fn random_items(count: usize, max_side: NonZeroU32, rng: &mut impl Rng) -> Vec<Item> {
    (0..count)
        .map(|i| {
            let width = random_side(max_side, rng);
            let height = random_side(max_side, rng);
            Item::from_nonzero(format!("Item{i}"), width, height)
        })
        .collect()
}

fn random_side(max_side: NonZeroU32, rng: &mut impl Rng) -> NonZeroU32 {
    NonZeroU32::MIN.saturating_add(rng.random_range(0..max_side.get()))
}

/// Packs the unpacked items in a random order, committing every item that
/// fits at its turn.
pub fn randomly_pack(suitcase: &Suitcase, rng: &mut impl Rng) -> Suitcase {
    pack_shuffled(suitcase, usize::MAX, rng)
}

/// Like [`randomly_pack`], but stops after a random number of commits, so the
/// result may leave packable items behind.
pub fn randomly_pack_partial(suitcase: &Suitcase, rng: &mut impl Rng) -> Suitcase {
    let limit = rng.random_range(0..=suitcase.num_items_unpacked());
    pack_shuffled(suitcase, limit, rng)
}

fn pack_shuffled(suitcase: &Suitcase, limit: usize, rng: &mut impl Rng) -> Suitcase {
    let mut candidates = suitcase.unpacked_items().to_vec();
    candidates.shuffle(rng);

    let mut packed = suitcase.clone();
    let mut commits = 0;
    for item in &candidates {
        if commits == limit {
            break;
        }
        if let Ok(next) = packed.pack_item(item) {
            packed = next;
            commits += 1;
        }
    }
    packed
}
