//! Window - in-memory container owning a flat list of elements

use crate::domain::{Rect, Size};
use crate::layout::Layout;

use super::{Container, Element, ElementId, Panel};

/// A container that owns its elements and has a resizable client area
#[derive(Clone, Debug, Default)]
pub struct Window<E: Element = Panel> {
    client_size: Size,
    elements: Vec<E>,
}

impl<E: Element> Window<E> {
    /// Create an empty window with the given client size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            client_size: Size::new(width, height),
            elements: Vec::new(),
        }
    }

    /// Add an element on top of the existing ones
    pub fn add(&mut self, element: E) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    pub fn get(&self, id: ElementId) -> Option<&E> {
        self.elements.get(id.0)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut E> {
        self.elements.get_mut(id.0)
    }

    /// Bounds of an element, or an empty rect for unknown ids
    pub fn bounds_of(&self, id: ElementId) -> Rect {
        self.get(id).map(|e| e.bounds()).unwrap_or_default()
    }

    /// Change the client area size
    pub fn resize(&mut self, width: i32, height: i32) {
        self.client_size = Size::new(width, height);
    }

    /// Arrange a root layout into the whole client area
    pub fn layout(&mut self, layout: &mut Layout) {
        let client = self.client_rect();
        layout.arrange(self, client);
    }
}

impl<E: Element> Container for Window<E> {
    fn elements(&self) -> Vec<ElementId> {
        (0..self.elements.len()).map(ElementId).collect()
    }

    fn client_size(&self) -> Size {
        self.client_size
    }

    fn element(&self, id: ElementId) -> Option<&dyn Element> {
        self.elements.get(id.0).map(|e| e as &dyn Element)
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut dyn Element> {
        self.elements.get_mut(id.0).map(|e| e as &mut dyn Element)
    }
}
