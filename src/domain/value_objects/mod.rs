//! Domain Value Objects - Immutable values that describe geometry
//!
//! Value objects have no identity and are compared by their values.
//! They are immutable and can be freely shared.

pub mod dimensions;
pub mod orientation;
pub mod rect;

pub use dimensions::{Edge, Edges, Size};
pub use orientation::{Align, Orientation};
pub use rect::Rect;
