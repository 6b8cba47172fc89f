//! Anchor import - rebuild anchor items from an already positioned container
//!
//! Anchor declarations live in a typed side table keyed by element id. The
//! import reads each element's current bounds and turns its declared edges
//! into gaps, so an existing arrangement can be kept across resizes.

use std::collections::HashMap;

use log::debug;

use crate::domain::{Edge, Edges, Rect};
use crate::shared::config::LayoutConfig;
use crate::widget::{Container, ElementId};

use super::anchor::AnchorLayout;
use super::item::{AnchorItem, AnchorRef, LayoutItem};

/// Declared anchoring of one element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnchorDecl {
    /// Edges that keep their current gap
    pub edges: Edges<bool>,
    /// Element whose matching edge the gap is measured from
    pub targets: Edges<Option<ElementId>>,
}

impl AnchorDecl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edge(mut self, edge: Edge) -> Self {
        *self.edges.get_mut(edge) = true;
        self
    }

    pub fn edge_to(mut self, edge: Edge, target: ElementId) -> Self {
        *self.edges.get_mut(edge) = true;
        *self.targets.get_mut(edge) = Some(target);
        self
    }

    pub fn left(self) -> Self {
        self.edge(Edge::Left)
    }

    pub fn top(self) -> Self {
        self.edge(Edge::Top)
    }

    pub fn right(self) -> Self {
        self.edge(Edge::Right)
    }

    pub fn bottom(self) -> Self {
        self.edge(Edge::Bottom)
    }

    /// Anchored on all four edges, so the element resizes with its reference
    pub fn all() -> Self {
        Self {
            edges: Edges::uniform(true),
            targets: Edges::default(),
        }
    }

    pub fn left_to(self, target: ElementId) -> Self {
        self.edge_to(Edge::Left, target)
    }

    pub fn top_to(self, target: ElementId) -> Self {
        self.edge_to(Edge::Top, target)
    }

    pub fn right_to(self, target: ElementId) -> Self {
        self.edge_to(Edge::Right, target)
    }

    pub fn bottom_to(self, target: ElementId) -> Self {
        self.edge_to(Edge::Bottom, target)
    }

    /// Used for elements without a declaration
    fn fallback() -> Self {
        Self::new().left().top()
    }
}

/// Element id to declared anchors
#[derive(Clone, Debug, Default)]
pub struct AnchorTable {
    decls: HashMap<ElementId, AnchorDecl>,
}

impl AnchorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor(mut self, id: ElementId, decl: AnchorDecl) -> Self {
        self.insert(id, decl);
        self
    }

    pub fn insert(&mut self, id: ElementId, decl: AnchorDecl) {
        self.decls.insert(id, decl);
    }

    pub fn get(&self, id: ElementId) -> Option<&AnchorDecl> {
        self.decls.get(&id)
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl AnchorLayout {
    /// Build an anchor layout reproducing the container's current arrangement.
    ///
    /// Gaps within `epsilon` of zero become an explicit zero gap. An axis
    /// anchored on fewer than two edges keeps the element's current extent
    /// as an explicit size.
    pub fn import(container: &dyn Container, table: &AnchorTable, epsilon: i32) -> AnchorLayout {
        let client = container.client_rect();
        let fallback = AnchorDecl::fallback();
        let mut layout = AnchorLayout::new();

        for id in container.elements() {
            let Some(element) = container.element(id) else {
                continue;
            };
            let bounds = element.bounds();
            let decl = table.get(id).unwrap_or(&fallback);
            let mut item = AnchorItem::element(id);

            for edge in Edge::ALL {
                if !*decl.edges.get(edge) {
                    continue;
                }
                let target = *decl.targets.get(edge);
                let reference = target
                    .and_then(|t| container.element(t))
                    .map(|e| e.bounds())
                    .unwrap_or(client);
                let gap = gap_between(edge, bounds, reference);
                *item.gaps.get_mut(edge) = Some(if gap.abs() <= epsilon { 0 } else { gap });
                if let Some(target) = target {
                    *item.targets.get_mut(edge) = Some(AnchorRef::Element(target));
                }
            }

            if !(decl.edges.left && decl.edges.right) {
                item = item.with_width(bounds.width());
            }
            if !(decl.edges.top && decl.edges.bottom) {
                item = item.with_height(bounds.height());
            }
            layout.push(item);
        }

        debug!(
            "Imported anchor layout with {} items ({} declared)",
            layout.len(),
            table.len()
        );
        layout
    }

    /// [`AnchorLayout::import`] with the snap distance from config
    pub fn import_with_config(
        container: &dyn Container,
        table: &AnchorTable,
        config: &LayoutConfig,
    ) -> AnchorLayout {
        Self::import(container, table, config.import_snap_epsilon)
    }
}

/// Gap from `reference`'s edge inward to the element's matching edge
fn gap_between(edge: Edge, element: Rect, reference: Rect) -> i32 {
    match edge {
        Edge::Left => element.left - reference.left,
        Edge::Top => element.top - reference.top,
        Edge::Right => reference.right - element.right,
        Edge::Bottom => reference.bottom - element.bottom,
    }
}
