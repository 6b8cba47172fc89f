//! Domain layer error types
//!
//! Layout errors are configuration mistakes in a declared tree. Measuring and
//! arranging never fail.

use thiserror::Error;

/// Kind of item a layout holds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Flow,
    Anchor,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Flow => write!(f, "flow"),
            ItemKind::Anchor => write!(f, "anchor"),
        }
    }
}

/// Main layout error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A named item or anchor target has no element in the bound container
    #[error("No element named '{name}' in the bound container")]
    UnresolvedName { name: String },

    /// An item of one layout kind was handed to the other kind of layout
    #[error("Cannot add {found} item to {expected} layout")]
    ItemKindMismatch { expected: ItemKind, found: ItemKind },

    /// Item index past the end of the item list
    #[error("Item index {index} out of range for a layout with {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type LayoutResult<T> = Result<T, LayoutError>;
