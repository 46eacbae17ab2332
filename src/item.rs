//! Item definitions.
//!
//! An item is a named rectangle. Only its area matters to the suitcase, the
//! width and height are kept so that an item never exceeds the suitcase along
//! either side.

use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;

use crate::error::PackingError;

/// A named rectangle waiting to be packed.
///
/// Names identify items for humans and need not be unique. Two items compare
/// equal when name, width and height all match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    name: Arc<str>,
    width: u32,
    height: u32,
}

impl Item {
    /// Creates an item, rejecting zero-sized dimensions.
    pub fn new(name: impl Into<Arc<str>>, width: u32, height: u32) -> Result<Self, PackingError> {
        let name = name.into();
        if width == 0 || height == 0 {
            return Err(PackingError::InvalidItem {
                name: name.to_string(),
                width,
                height,
            });
        }
        Ok(Self {
            name,
            width,
            height,
        })
    }

    /// Creates an item whose dimensions are positive by construction.
    pub(crate) fn from_nonzero(
        name: impl Into<Arc<str>>,
        width: NonZeroU32,
        height: NonZeroU32,
    ) -> Self {
        Self {
            name: name.into(),
            width: width.get(),
            height: height.get(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width times height.
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.name, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_is_width_times_height() {
        let item = Item::new("I2", 5, 5).unwrap();
        assert_eq!(item.area(), 25);
    }

    #[test]
    fn test_area_does_not_overflow_u32() {
        let item = Item::new("huge", u32::MAX, u32::MAX).unwrap();
        assert_eq!(item.area(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        assert_eq!(
            Item::new("flat", 4, 0),
            Err(PackingError::InvalidItem {
                name: "flat".to_string(),
                width: 4,
                height: 0,
            })
        );
        assert!(Item::new("thin", 0, 4).is_err());
    }

    #[test]
    fn test_equality_is_by_value() {
        let first = Item::new("A", 2, 3).unwrap();
        let second = Item::new(String::from("A"), 2, 3).unwrap();
        assert_eq!(first, second);
        assert_ne!(first, Item::new("A", 3, 2).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(Item::new("L", 2, 2).unwrap().to_string(), "L (2x2)");
    }
}
