//! Errors raised by the container model.

use thiserror::Error;

/// Contract violations surfaced by [`Item`](crate::item::Item) and
/// [`Suitcase`](crate::suitcase::Suitcase).
///
/// `InvalidSuitcase` and `InvalidItem` are configuration errors caught at
/// construction time. `ItemNotUnpacked` and `ItemDoesNotFit` are precondition
/// violations of [`Suitcase::pack_item`](crate::suitcase::Suitcase::pack_item).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackingError {
    #[error("suitcase dimensions must be positive, got {width}x{height}")]
    InvalidSuitcase { width: u32, height: u32 },

    #[error("item `{name}` must have positive dimensions, got {width}x{height}")]
    InvalidItem {
        name: String,
        width: u32,
        height: u32,
    },

    #[error("item `{name}` is not among the unpacked items")]
    ItemNotUnpacked { name: String },

    #[error("item `{name}` (area {area}) does not fit, {remaining} area left in a {width}x{height} suitcase")]
    ItemDoesNotFit {
        name: String,
        area: u64,
        remaining: u64,
        width: u32,
        height: u32,
    },
}
