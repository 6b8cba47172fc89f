//! Widget boundary for the layout engines
//!
//! Layouts never own the visual elements they place. A [`Container`] owns
//! them and hands out [`ElementId`]s; layouts hold ids, ask the container
//! for preferred sizes while measuring, and push bounds back while
//! arranging.
//!
//! [`Panel`] and [`Window`] are an in-memory element and container, enough
//! to drive a layout tree without a windowing system.

pub mod panel;
pub mod window;

use crate::domain::{Rect, Size};

pub use panel::Panel;
pub use window::Window;

/// Identity of an element inside its container
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A visual element that can be measured and placed
pub trait Element {
    /// Lookup name, if the element has one
    fn name(&self) -> Option<&str> {
        None
    }

    /// Size the element would like to have within `max`
    fn preferred_size(&self, max: Size) -> Size;

    /// Current bounds in container coordinates
    fn bounds(&self) -> Rect;

    /// Move and resize the element
    fn set_bounds(&mut self, bounds: Rect);

    /// Request a redraw after the bounds changed
    fn refresh(&mut self) {}
}

/// Owner of the elements a layout arranges
pub trait Container {
    /// Ids of all elements, in z order
    fn elements(&self) -> Vec<ElementId>;

    /// Size of the client area layouts are arranged into
    fn client_size(&self) -> Size;

    fn element(&self, id: ElementId) -> Option<&dyn Element>;

    fn element_mut(&mut self, id: ElementId) -> Option<&mut dyn Element>;

    /// Find an element by its lookup name
    fn element_by_name(&self, name: &str) -> Option<ElementId> {
        self.elements()
            .into_iter()
            .find(|id| self.element(*id).and_then(|e| e.name()) == Some(name))
    }

    /// Client area as a rectangle at the origin
    fn client_rect(&self) -> Rect {
        Rect::from_size(self.client_size())
    }
}
