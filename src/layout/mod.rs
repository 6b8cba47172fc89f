//! Layout engine module
//!
//! A [`Layout`] is either a [`FlowLayout`] or an [`AnchorLayout`]. Both
//! measure (preferred size under a maximum) and arrange (assign bounds)
//! their items, and either can be nested in an item of the other.
//!
//! Typical use:
//!
//! 1. declare the tree with the item builders
//! 2. [`Layout::bind`] it once to the container, resolving element names
//! 3. [`Layout::arrange`] it on every resize, after [`Layout::invalidate`]
//!    whenever items or element content changed

pub mod anchor;
pub mod cache;
pub mod defaults;
pub mod flow;
pub mod groups;
pub mod import;
pub mod item;

use std::rc::Rc;

use crate::domain::{ItemKind, LayoutError, LayoutResult, Rect, Size};
use crate::widget::Container;

pub use anchor::AnchorLayout;
pub use defaults::{ResolvedAnchorItem, ResolvedFlowItem, SizeSpec};
pub use flow::{FlowLayout, FlowMeasure};
pub use groups::SizeGroups;
pub use import::{AnchorDecl, AnchorTable};
pub use item::{AnchorItem, AnchorRef, FlowItem, Item, ItemCommon, ItemTarget, LayoutItem};

/// When an arrange hook runs relative to the arrangement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrangePhase {
    Before,
    After,
}

/// Listener notified with the target rectangle around every arrange call
pub type ArrangeHook = Rc<dyn Fn(ArrangePhase, Rect)>;

/// Hooks registered on one layout; shared between clones
#[derive(Clone, Default)]
pub struct Hooks(Vec<ArrangeHook>);

impl Hooks {
    pub fn add(&mut self, hook: impl Fn(ArrangePhase, Rect) + 'static) {
        self.0.push(Rc::new(hook));
    }

    pub fn fire(&self, phase: ArrangePhase, rect: Rect) {
        for hook in &self.0 {
            hook(phase, rect);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hooks({})", self.0.len())
    }
}

/// A flow or anchor layout
#[derive(Clone, Debug)]
pub enum Layout {
    Flow(FlowLayout),
    Anchor(AnchorLayout),
}

impl From<FlowLayout> for Layout {
    fn from(layout: FlowLayout) -> Self {
        Layout::Flow(layout)
    }
}

impl From<AnchorLayout> for Layout {
    fn from(layout: AnchorLayout) -> Self {
        Layout::Anchor(layout)
    }
}

impl Layout {
    /// Kind of item this layout accepts
    pub fn kind(&self) -> ItemKind {
        match self {
            Layout::Flow(_) => ItemKind::Flow,
            Layout::Anchor(_) => ItemKind::Anchor,
        }
    }

    /// Preferred size within `max`; cached per `max` until invalidated
    pub fn measure(&mut self, container: &dyn Container, max: Size) -> Size {
        match self {
            Layout::Flow(flow) => flow.measure(container, max),
            Layout::Anchor(anchor) => anchor.measure(container, max),
        }
    }

    /// Place every item inside `bounds`.
    ///
    /// Size groups are collected over the whole tree first, so a group
    /// spanning nested layouts resolves to one size everywhere.
    pub fn arrange(&mut self, container: &mut dyn Container, bounds: Rect) {
        let mut groups = SizeGroups::new();
        self.collect_size_groups(&*container, bounds.size(), &mut groups);
        self.arrange_with(container, bounds, &mut groups);
    }

    /// Size-group table the next arrange into a `max`-sized rect would use
    pub fn size_groups(&mut self, container: &dyn Container, max: Size) -> SizeGroups {
        let mut groups = SizeGroups::new();
        self.collect_size_groups(container, max, &mut groups);
        groups
    }

    pub(crate) fn arrange_with(
        &mut self,
        container: &mut dyn Container,
        bounds: Rect,
        groups: &mut SizeGroups,
    ) {
        match self {
            Layout::Flow(flow) => flow.arrange_with(container, bounds, groups),
            Layout::Anchor(anchor) => anchor.arrange_with(container, bounds, groups),
        }
    }

    pub(crate) fn collect_size_groups(
        &mut self,
        container: &dyn Container,
        max: Size,
        groups: &mut SizeGroups,
    ) {
        match self {
            Layout::Flow(flow) => flow.collect_size_groups(container, max, groups),
            Layout::Anchor(anchor) => anchor.collect_size_groups(container, max, groups),
        }
    }

    pub(crate) fn collapse(&mut self, container: &mut dyn Container, rect: Rect) {
        match self {
            Layout::Flow(flow) => flow.collapse(container, rect),
            Layout::Anchor(anchor) => anchor.collapse(container, rect),
        }
    }

    /// Resolve names against `container`; fails on the first unknown name
    pub fn bind(&mut self, container: &dyn Container) -> LayoutResult<()> {
        match self {
            Layout::Flow(flow) => flow.bind(container),
            Layout::Anchor(anchor) => anchor.bind(container),
        }
    }

    /// Drop memoized defaults and measurements throughout the tree
    pub fn invalidate(&mut self) {
        match self {
            Layout::Flow(flow) => flow.invalidate(),
            Layout::Anchor(anchor) => anchor.invalidate(),
        }
    }

    pub fn push_item(&mut self, item: impl Into<Item>) -> LayoutResult<()> {
        let len = self.len();
        self.insert_item(len, item)
    }

    pub fn insert_item(&mut self, index: usize, item: impl Into<Item>) -> LayoutResult<()> {
        match (self, item.into()) {
            (Layout::Flow(flow), Item::Flow(item)) => flow.insert(index, item),
            (Layout::Anchor(anchor), Item::Anchor(item)) => anchor.insert(index, item),
            (layout, item) => Err(LayoutError::ItemKindMismatch {
                expected: layout.kind(),
                found: item.kind(),
            }),
        }
    }

    pub fn remove_item(&mut self, index: usize) -> LayoutResult<Item> {
        match self {
            Layout::Flow(flow) => flow.remove(index).map(Item::Flow),
            Layout::Anchor(anchor) => anchor.remove(index).map(Item::Anchor),
        }
    }

    pub fn clear(&mut self) {
        match self {
            Layout::Flow(flow) => flow.clear(),
            Layout::Anchor(anchor) => anchor.clear(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Layout::Flow(flow) => flow.len(),
            Layout::Anchor(anchor) => anchor.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn add_hook(&mut self, hook: impl Fn(ArrangePhase, Rect) + 'static) {
        match self {
            Layout::Flow(flow) => flow.add_hook(hook),
            Layout::Anchor(anchor) => anchor.add_hook(hook),
        }
    }

    pub fn as_flow(&self) -> Option<&FlowLayout> {
        match self {
            Layout::Flow(flow) => Some(flow),
            Layout::Anchor(_) => None,
        }
    }

    pub fn as_flow_mut(&mut self) -> Option<&mut FlowLayout> {
        match self {
            Layout::Flow(flow) => Some(flow),
            Layout::Anchor(_) => None,
        }
    }

    pub fn as_anchor(&self) -> Option<&AnchorLayout> {
        match self {
            Layout::Anchor(anchor) => Some(anchor),
            Layout::Flow(_) => None,
        }
    }

    pub fn as_anchor_mut(&mut self) -> Option<&mut AnchorLayout> {
        match self {
            Layout::Anchor(anchor) => Some(anchor),
            Layout::Flow(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::domain::{Align, Edge};
    use crate::widget::{Panel, Window};

    #[test]
    fn test_push_rejects_wrong_item_kind() {
        let mut layout = Layout::from(FlowLayout::row());

        assert!(layout.push_item(FlowItem::new()).is_ok());
        assert_eq!(
            layout.push_item(AnchorItem::new()),
            Err(LayoutError::ItemKindMismatch {
                expected: ItemKind::Flow,
                found: ItemKind::Anchor,
            })
        );
        assert_eq!(layout.len(), 1);

        let mut anchor = Layout::from(AnchorLayout::new());
        assert!(anchor.push_item(FlowItem::new()).is_err());
        assert!(anchor.push_item(AnchorItem::new()).is_ok());
        assert!(matches!(anchor.remove_item(0), Ok(Item::Anchor(_))));
        assert!(anchor.is_empty());
    }

    #[test]
    fn test_dialog_tree_arranges_end_to_end() {
        let mut window: Window = Window::new(400, 300);
        window.add(Panel::new(60, 20).with_name("caption"));
        let list = window.add(Panel::new(100, 100).with_name("list"));
        let ok = window.add(Panel::new(70, 24).with_name("ok"));
        let cancel = window.add(Panel::new(70, 24).with_name("cancel"));

        let buttons = FlowLayout::row()
            .with_item(FlowItem::new().with_weight(1))
            .with_item(FlowItem::named("ok").with_size_group("buttons"))
            .with_item(
                FlowItem::named("cancel")
                    .with_size_group("buttons")
                    .with_padding_edge(Edge::Left, 6),
            );
        let mut layout = Layout::from(
            FlowLayout::column()
                .with_template(FlowItem::new().with_uniform_padding(4))
                .with_item(FlowItem::named("caption").with_align(Align::Start))
                .with_item(FlowItem::named("list").with_weight(1))
                .with_item(FlowItem::layout(buttons).with_uniform_padding(0)),
        );

        layout.bind(&window).unwrap();
        window.layout(&mut layout);

        // caption 4+20+4, buttons 24, list takes the rest
        assert_eq!(window.bounds_of(list), Rect::new(4, 32, 396, 272));
        assert_eq!(window.bounds_of(cancel), Rect::new(330, 276, 400, 300));
        assert_eq!(window.bounds_of(ok), Rect::new(254, 276, 324, 300));
    }

    #[test]
    fn test_hooks_fire_for_every_arrange() {
        let mut window: Window = Window::new(100, 100);
        let count = std::rc::Rc::new(Cell::new(0));
        let seen = count.clone();
        let mut layout = Layout::from(AnchorLayout::new());
        layout.add_hook(move |phase, _| {
            if phase == ArrangePhase::After {
                seen.set(seen.get() + 1);
            }
        });

        layout.arrange(&mut window, Rect::new(0, 0, 100, 100));
        layout.arrange(&mut window, Rect::new(0, 0, 50, 50));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_cloned_layout_shares_hooks() {
        let mut window: Window = Window::new(100, 100);
        let count = std::rc::Rc::new(Cell::new(0));
        let seen = count.clone();
        let original = Layout::from(FlowLayout::row().with_hook(move |phase, _| {
            if phase == ArrangePhase::Before {
                seen.set(seen.get() + 1);
            }
        }));

        let mut copy = original.clone();
        copy.arrange(&mut window, Rect::new(0, 0, 100, 100));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_size_groups_report() {
        let mut window: Window = Window::new(100, 100);
        let a = window.add(Panel::new(30, 10));
        let b = window.add(Panel::new(45, 10));
        let mut layout = Layout::from(
            FlowLayout::column()
                .with_item(FlowItem::element(a).with_size_group("w"))
                .with_item(FlowItem::layout(
                    FlowLayout::column().with_item(FlowItem::element(b).with_size_group("w")),
                )),
        );

        let groups = layout.size_groups(&window, Size::new(100, 100));
        assert_eq!(groups.get("w"), Some(45));

        window.layout(&mut layout);
        assert_eq!(window.bounds_of(a).width(), 45);
        assert_eq!(window.bounds_of(b).width(), 45);
    }
}
