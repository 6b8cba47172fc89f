//! Layout items - one child slot of a flow or anchor layout
//!
//! An item wraps what gets placed (an element, a nested layout, or nothing
//! for a spacer) together with sizing attributes. Every omittable attribute
//! is an `Option`: `None` defers to the owning layout's item template,
//! `Some(0)` is an explicit zero.

use log::warn;

use crate::domain::{Align, Edge, Edges, ItemKind, LayoutError, LayoutResult, Rect, Size};
use crate::widget::{Container, ElementId};

use super::defaults::SizeSpec;
use super::groups::SizeGroups;
use super::Layout;

/// What an item places
#[derive(Clone, Debug, Default)]
pub enum ItemTarget {
    /// Spacer with zero preferred size
    #[default]
    Empty,
    /// Element owned by the container
    Element(ElementId),
    /// Nested layout owned by this item
    Layout(Box<Layout>),
}

impl ItemTarget {
    /// Preferred size of the target within `max`
    pub(crate) fn preferred_size(&mut self, container: &dyn Container, max: Size) -> Size {
        match self {
            ItemTarget::Empty => Size::ZERO,
            ItemTarget::Element(id) => match container.element(*id) {
                Some(element) => element.preferred_size(max),
                None => {
                    warn!("Layout item refers to missing element {}", id);
                    Size::ZERO
                }
            },
            ItemTarget::Layout(layout) => layout.measure(container, max),
        }
    }

    /// Push arranged bounds to the target
    pub(crate) fn place(
        &mut self,
        container: &mut dyn Container,
        rect: Rect,
        groups: &mut SizeGroups,
    ) {
        match self {
            ItemTarget::Empty => {}
            ItemTarget::Element(id) => {
                if let Some(element) = container.element_mut(*id) {
                    element.set_bounds(rect);
                    element.refresh();
                }
            }
            ItemTarget::Layout(layout) => layout.arrange_with(container, rect, groups),
        }
    }

    /// Give the target, and everything below it, a zero-area placement
    pub(crate) fn collapse(&mut self, container: &mut dyn Container, rect: Rect) {
        match self {
            ItemTarget::Empty => {}
            ItemTarget::Element(id) => {
                if let Some(element) = container.element_mut(*id) {
                    element.set_bounds(rect);
                    element.refresh();
                }
            }
            ItemTarget::Layout(layout) => layout.collapse(container, rect),
        }
    }

    pub fn element_id(&self) -> Option<ElementId> {
        match self {
            ItemTarget::Element(id) => Some(*id),
            _ => None,
        }
    }

    pub fn layout(&self) -> Option<&Layout> {
        match self {
            ItemTarget::Layout(layout) => Some(layout),
            _ => None,
        }
    }

    pub fn layout_mut(&mut self) -> Option<&mut Layout> {
        match self {
            ItemTarget::Layout(layout) => Some(layout),
            _ => None,
        }
    }
}

/// Attributes shared by flow and anchor items
#[derive(Clone, Debug, Default)]
pub struct ItemCommon {
    pub target: ItemTarget,
    /// Element name resolved against the container at bind time
    pub name: Option<String>,
    /// Explicit width, replaces the preferred width
    pub width: Option<i32>,
    /// Explicit height, replaces the preferred height
    pub height: Option<i32>,
    pub min_width: Option<i32>,
    pub min_height: Option<i32>,
    /// Excluded from space accounting, placed at a zero-size rect
    pub collapsed: bool,
}

impl ItemCommon {
    /// Resolve the name to an element and bind nested layouts
    pub(crate) fn bind(&mut self, container: &dyn Container) -> LayoutResult<()> {
        if let ItemTarget::Layout(layout) = &mut self.target {
            return layout.bind(container);
        }
        if let Some(name) = &self.name {
            let id = container
                .element_by_name(name)
                .ok_or_else(|| LayoutError::UnresolvedName { name: name.clone() })?;
            self.target = ItemTarget::Element(id);
        }
        Ok(())
    }

    /// Natural size: explicit size over preferred size, raised to the minimums
    pub(crate) fn natural_size(
        &mut self,
        container: &dyn Container,
        max: Size,
        spec: &SizeSpec,
    ) -> Size {
        let size = match (spec.width, spec.height) {
            (Some(width), Some(height)) => Size::new(width, height),
            (width, height) => {
                if matches!(self.target, ItemTarget::Empty) {
                    if let Some(name) = &self.name {
                        warn!("Measuring item '{}' before the layout was bound", name);
                    }
                }
                let query = Size::new(width.unwrap_or(max.width), height.unwrap_or(max.height));
                let preferred = self.target.preferred_size(container, query.non_negative());
                Size::new(
                    width.unwrap_or(preferred.width),
                    height.unwrap_or(preferred.height),
                )
            }
        };
        Size::new(
            size.width.max(spec.min_width),
            size.height.max(spec.min_height),
        )
        .non_negative()
    }
}

/// Capabilities shared by every item kind
///
/// The builder methods are available on both [`FlowItem`] and [`AnchorItem`].
pub trait LayoutItem {
    fn common(&self) -> &ItemCommon;

    fn common_mut(&mut self) -> &mut ItemCommon;

    fn kind(&self) -> ItemKind;

    fn target(&self) -> &ItemTarget {
        &self.common().target
    }

    fn name(&self) -> Option<&str> {
        self.common().name.as_deref()
    }

    fn is_collapsed(&self) -> bool {
        self.common().collapsed
    }

    /// Collapse or restore the item; takes effect after the layout is invalidated
    fn set_collapsed(&mut self, collapsed: bool) {
        self.common_mut().collapsed = collapsed;
    }

    fn with_width(mut self, width: i32) -> Self
    where
        Self: Sized,
    {
        self.common_mut().width = Some(width);
        self
    }

    fn with_height(mut self, height: i32) -> Self
    where
        Self: Sized,
    {
        self.common_mut().height = Some(height);
        self
    }

    fn with_size(self, width: i32, height: i32) -> Self
    where
        Self: Sized,
    {
        self.with_width(width).with_height(height)
    }

    fn with_min_width(mut self, min_width: i32) -> Self
    where
        Self: Sized,
    {
        self.common_mut().min_width = Some(min_width);
        self
    }

    fn with_min_height(mut self, min_height: i32) -> Self
    where
        Self: Sized,
    {
        self.common_mut().min_height = Some(min_height);
        self
    }

    fn with_collapsed(mut self, collapsed: bool) -> Self
    where
        Self: Sized,
    {
        self.common_mut().collapsed = collapsed;
        self
    }
}

fn common_for(target: ItemTarget, name: Option<String>) -> ItemCommon {
    ItemCommon {
        target,
        name,
        ..Default::default()
    }
}

/// An item of a flow layout
#[derive(Clone, Debug, Default)]
pub struct FlowItem {
    pub common: ItemCommon,
    pub padding: Edges<Option<i32>>,
    /// Share of leftover axis space; unset or 0 means rigid
    pub weight: Option<u32>,
    /// Cross-axis alignment inside the line
    pub align: Align,
    /// Items with the same key share one cross size
    pub size_group: Option<String>,
}

impl FlowItem {
    /// A spacer item
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(id: ElementId) -> Self {
        Self {
            common: common_for(ItemTarget::Element(id), None),
            ..Default::default()
        }
    }

    /// Item placing the element with this name, resolved by `bind`
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            common: common_for(ItemTarget::Empty, Some(name.into())),
            ..Default::default()
        }
    }

    pub fn layout(layout: impl Into<Layout>) -> Self {
        Self {
            common: common_for(ItemTarget::Layout(Box::new(layout.into())), None),
            ..Default::default()
        }
    }

    pub fn with_padding(mut self, padding: Edges<Option<i32>>) -> Self {
        self.padding = padding;
        self
    }

    /// Same explicit padding on all four sides
    pub fn with_uniform_padding(mut self, padding: i32) -> Self {
        self.padding = Edges::uniform(Some(padding));
        self
    }

    pub fn with_padding_edge(mut self, edge: Edge, padding: i32) -> Self {
        *self.padding.get_mut(edge) = Some(padding);
        self
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_size_group(mut self, key: impl Into<String>) -> Self {
        self.size_group = Some(key.into());
        self
    }
}

impl LayoutItem for FlowItem {
    fn common(&self) -> &ItemCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ItemCommon {
        &mut self.common
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Flow
    }
}

/// Reference edge owner for an anchored gap
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorRef {
    Element(ElementId),
    /// Resolved to `Element` by `bind`
    Named(String),
}

impl From<ElementId> for AnchorRef {
    fn from(id: ElementId) -> Self {
        AnchorRef::Element(id)
    }
}

impl From<&str> for AnchorRef {
    fn from(name: &str) -> Self {
        AnchorRef::Named(name.to_string())
    }
}

/// An item of an anchor layout
#[derive(Clone, Debug, Default)]
pub struct AnchorItem {
    pub common: ItemCommon,
    /// Gap to each reference edge; unset means not anchored on that edge
    pub gaps: Edges<Option<i32>>,
    /// Sibling whose matching edge replaces the container edge
    pub targets: Edges<Option<AnchorRef>>,
}

impl AnchorItem {
    /// An anchor item with nothing to place
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(id: ElementId) -> Self {
        Self {
            common: common_for(ItemTarget::Element(id), None),
            ..Default::default()
        }
    }

    /// Item placing the element with this name, resolved by `bind`
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            common: common_for(ItemTarget::Empty, Some(name.into())),
            ..Default::default()
        }
    }

    pub fn layout(layout: impl Into<Layout>) -> Self {
        Self {
            common: common_for(ItemTarget::Layout(Box::new(layout.into())), None),
            ..Default::default()
        }
    }

    /// Anchor one edge at `gap` from the container edge
    pub fn with_gap(mut self, edge: Edge, gap: i32) -> Self {
        *self.gaps.get_mut(edge) = Some(gap);
        self
    }

    /// Anchor one edge at `gap` from the matching edge of `target`
    pub fn with_gap_to(mut self, edge: Edge, gap: i32, target: impl Into<AnchorRef>) -> Self {
        *self.gaps.get_mut(edge) = Some(gap);
        *self.targets.get_mut(edge) = Some(target.into());
        self
    }

    pub fn with_left(self, gap: i32) -> Self {
        self.with_gap(Edge::Left, gap)
    }

    pub fn with_top(self, gap: i32) -> Self {
        self.with_gap(Edge::Top, gap)
    }

    pub fn with_right(self, gap: i32) -> Self {
        self.with_gap(Edge::Right, gap)
    }

    pub fn with_bottom(self, gap: i32) -> Self {
        self.with_gap(Edge::Bottom, gap)
    }

    /// Resolve the item name and any named anchor targets
    pub(crate) fn bind(&mut self, container: &dyn Container) -> LayoutResult<()> {
        self.common.bind(container)?;
        for target in self.targets.iter_mut() {
            let name = match target {
                Some(AnchorRef::Named(name)) => name.clone(),
                _ => continue,
            };
            let id = container
                .element_by_name(&name)
                .ok_or(LayoutError::UnresolvedName { name })?;
            *target = Some(AnchorRef::Element(id));
        }
        Ok(())
    }
}

impl LayoutItem for AnchorItem {
    fn common(&self) -> &ItemCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ItemCommon {
        &mut self.common
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Anchor
    }
}

/// An item of either kind, as accepted by [`Layout::push_item`]
#[derive(Clone, Debug)]
pub enum Item {
    Flow(FlowItem),
    Anchor(AnchorItem),
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Flow(_) => ItemKind::Flow,
            Item::Anchor(_) => ItemKind::Anchor,
        }
    }
}

impl From<FlowItem> for Item {
    fn from(item: FlowItem) -> Self {
        Item::Flow(item)
    }
}

impl From<AnchorItem> for Item {
    fn from(item: AnchorItem) -> Self {
        Item::Anchor(item)
    }
}
