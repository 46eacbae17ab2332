//! The suitcase container model.
//!
//! A suitcase has a fixed width and height and tracks which items are still
//! unpacked and which have been packed, in the order they were packed. Fit is
//! an aggregate area budget: no positions are tracked, an item fits when its
//! area plus the area already packed stays within `width * height` (and the
//! item is not longer than the suitcase along either side).
//!
//! Packing never mutates a suitcase. [`Suitcase::pack_item`] returns the
//! successor state, so search code can branch from one snapshot many times.

use std::fmt;

use crate::assertions;
use crate::error::PackingError;
use crate::item::Item;

/// A fixed-size container partitioning its items into unpacked and packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suitcase {
    width: u32,
    height: u32,
    /// Items not yet packed, in their original relative order.
    unpacked: Vec<Item>,
    /// Items packed so far, in commit order.
    packed: Vec<Item>,
    /// Cached sum of `packed` areas.
    area_packed: u64,
    /// Cached sum of `unpacked` areas.
    area_unpacked: u64,
}

impl Suitcase {
    /// Creates a suitcase with every item unpacked.
    pub fn new(width: u32, height: u32, items: Vec<Item>) -> Result<Self, PackingError> {
        if width == 0 || height == 0 {
            return Err(PackingError::InvalidSuitcase { width, height });
        }
        let area_unpacked = items.iter().map(Item::area).sum();
        Ok(Self {
            width,
            height,
            unpacked: items,
            packed: Vec::new(),
            area_packed: 0,
            area_unpacked,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total area budget, `width * height`.
    #[inline]
    pub fn capacity(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Area budget not yet used by packed items.
    #[inline]
    pub fn remaining_capacity(&self) -> u64 {
        self.capacity() - self.area_packed
    }

    /// Sum of the areas of all packed items.
    #[inline]
    pub fn area_packed(&self) -> u64 {
        self.area_packed
    }

    /// Sum of the areas of all unpacked items.
    #[inline]
    pub fn area_unpacked(&self) -> u64 {
        self.area_unpacked
    }

    pub fn num_items_packed(&self) -> usize {
        self.packed.len()
    }

    pub fn num_items_unpacked(&self) -> usize {
        self.unpacked.len()
    }

    /// Unpacked items in their current order.
    pub fn unpacked_items(&self) -> &[Item] {
        &self.unpacked
    }

    /// Packed items in the order they were packed.
    pub fn packed_items(&self) -> &[Item] {
        &self.packed
    }

    /// Returns whether `item` would fit next to what is already packed,
    /// regardless of whether it is currently unpacked.
    #[inline]
    pub fn has_room_for(&self, item: &Item) -> bool {
        item.width() <= self.width
            && item.height() <= self.height
            && item.area() <= self.remaining_capacity()
    }

    /// Returns whether `item` is unpacked and fits in the remaining capacity.
    ///
    /// Never fails: an item that is not unpacked simply cannot be packed.
    pub fn can_pack_item(&self, item: &Item) -> bool {
        self.has_room_for(item) && self.unpacked.contains(item)
    }

    /// Returns whether any unpacked item can still be packed.
    pub fn can_pack_any(&self) -> bool {
        self.unpacked.iter().any(|item| self.has_room_for(item))
    }

    /// Returns the successor state with `item` moved to the end of the packed
    /// items.
    ///
    /// With duplicate items, the first equal unpacked occurrence is moved.
    pub fn pack_item(&self, item: &Item) -> Result<Self, PackingError> {
        let Some(position) = self.unpacked.iter().position(|unpacked| unpacked == item) else {
            return Err(PackingError::ItemNotUnpacked {
                name: item.name().to_string(),
            });
        };
        if !self.has_room_for(item) {
            return Err(PackingError::ItemDoesNotFit {
                name: item.name().to_string(),
                area: item.area(),
                remaining: self.remaining_capacity(),
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pack_position(position))
    }

    /// Packs the unpacked item at `position`.
    ///
    /// The caller must have checked `has_room_for` on that item.
    pub(crate) fn pack_position(&self, position: usize) -> Self {
        let mut next = self.clone();
        let item = next.unpacked.remove(position);
        next.area_packed += item.area();
        next.area_unpacked -= item.area();
        next.packed.push(item);

        debug_assert!(assertions::suitcase_is_consistent(&next));
        next
    }
}

impl fmt::Display for Suitcase {
    /// Renders the dimensions and area usage, then the packed items in pack
    /// order and the unpacked items in current order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "suitcase {}x{}: {} of {} area packed",
            self.width,
            self.height,
            self.area_packed,
            self.capacity()
        )?;
        writeln!(f, "packed ({}):", self.packed.len())?;
        for (i, item) in self.packed.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, item)?;
        }
        writeln!(f, "unpacked ({}):", self.unpacked.len())?;
        for item in &self.unpacked {
            writeln!(f, "  - {}", item)?;
        }
        Ok(())
    }
}
