//! Domain layer - geometry value objects and error types
//!
//! Nothing in here knows about elements or containers.

pub mod errors;
pub mod value_objects;

pub use errors::{ItemKind, LayoutError, LayoutResult};
pub use value_objects::{Align, Edge, Edges, Orientation, Rect, Size};
