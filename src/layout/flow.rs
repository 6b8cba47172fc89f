//! Flow layout - items laid out in a row or a column
//!
//! Measuring walks the items once. Rigid items add their natural extent to
//! the axis total; flexible items (weight > 0) only add their weight and get
//! their extent at arrange time from the leftover axis space. The last
//! flexible item absorbs the rounding remainder, so flexible extents always
//! sum to the leftover space exactly.

use log::{debug, trace};

use crate::domain::{Align, LayoutError, LayoutResult, Orientation, Rect, Size};
use crate::shared::config::LayoutConfig;
use crate::widget::Container;

use super::cache::MeasureCache;
use super::defaults::{ResolvedCache, ResolvedFlowItem};
use super::groups::SizeGroups;
use super::item::FlowItem;
use super::{ArrangePhase, Hooks};

/// Result of measuring a flow layout under one maximum size
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlowMeasure {
    /// Preferred size of the whole flow
    pub size: Size,
    /// Natural size of each item; zero for collapsed items
    pub naturals: Vec<Size>,
    /// Collapse state of each item when measured
    pub collapsed: Vec<bool>,
    /// Weight of each item when measured; 0 for rigid and collapsed items
    pub weights: Vec<u32>,
    /// Axis space taken by rigid items and by every item's padding
    pub fixed_axis: i32,
    /// Sum of the weights of flexible items
    pub weight_total: i64,
}

/// Items placed one after another along an axis
#[derive(Clone, Debug, Default)]
pub struct FlowLayout {
    orientation: Orientation,
    /// Placement of the whole flow across the axis
    content_align: Align,
    items: Vec<FlowItem>,
    template: FlowItem,
    resolved: ResolvedCache<ResolvedFlowItem>,
    cache: MeasureCache<FlowMeasure>,
    hooks: Hooks,
}

impl FlowLayout {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Default::default()
        }
    }

    /// Horizontal flow
    pub fn row() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Vertical flow
    pub fn column() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Flow whose item template and content alignment come from config
    pub fn from_config(orientation: Orientation, config: &LayoutConfig) -> Self {
        Self {
            orientation,
            content_align: config.content_align,
            template: config.flow.template(),
            ..Default::default()
        }
    }

    pub fn with_item(mut self, item: FlowItem) -> Self {
        self.push(item);
        self
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = FlowItem>) -> Self {
        for item in items {
            self.push(item);
        }
        self
    }

    pub fn with_content_align(mut self, align: Align) -> Self {
        self.content_align = align;
        self
    }

    pub fn with_template(mut self, template: FlowItem) -> Self {
        self.set_template(template);
        self
    }

    /// Register a pre/post arrange listener
    pub fn with_hook(mut self, hook: impl Fn(ArrangePhase, Rect) + 'static) -> Self {
        self.add_hook(hook);
        self
    }

    pub fn add_hook(&mut self, hook: impl Fn(ArrangePhase, Rect) + 'static) {
        self.hooks.add(hook);
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.cache.invalidate();
    }

    pub fn content_align(&self) -> Align {
        self.content_align
    }

    pub fn set_content_align(&mut self, align: Align) {
        self.content_align = align;
    }

    pub fn template(&self) -> &FlowItem {
        &self.template
    }

    pub fn set_template(&mut self, template: FlowItem) {
        self.template = template;
        self.invalidate();
    }

    pub fn items(&self) -> &[FlowItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&FlowItem> {
        self.items.get(index)
    }

    /// Edit an item in place. The layout is not invalidated.
    pub fn item_mut(&mut self, index: usize) -> Option<&mut FlowItem> {
        self.items.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: FlowItem) {
        self.items.push(item);
        self.invalidate();
    }

    pub fn insert(&mut self, index: usize, item: FlowItem) -> LayoutResult<()> {
        if index > self.items.len() {
            return Err(LayoutError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.items.insert(index, item);
        self.invalidate();
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> LayoutResult<FlowItem> {
        if index >= self.items.len() {
            return Err(LayoutError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let item = self.items.remove(index);
        self.invalidate();
        Ok(item)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.invalidate();
    }

    /// Drop memoized defaults and measurements, here and in nested layouts
    pub fn invalidate(&mut self) {
        self.resolved.invalidate();
        self.cache.invalidate();
        for item in &mut self.items {
            if let Some(nested) = item.common.target.layout_mut() {
                nested.invalidate();
            }
        }
    }

    /// Resolve item names against the container, recursively.
    ///
    /// Nothing changes unless every name resolves.
    pub fn bind(&mut self, container: &dyn Container) -> LayoutResult<()> {
        let mut items = self.items.clone();
        for item in &mut items {
            item.common.bind(container)?;
        }
        self.items = items;
        self.invalidate();
        debug!(
            "Bound {:?} flow layout with {} items",
            self.orientation,
            self.items.len()
        );
        Ok(())
    }

    /// Items merged with the template, memoized
    pub fn resolved_items(&mut self) -> &[ResolvedFlowItem] {
        let Self {
            items,
            template,
            resolved,
            ..
        } = self;
        resolved.get_or_resolve(|| items.iter().map(|item| item.resolve(template)).collect())
    }

    /// Preferred size of the flow within `max`
    pub fn measure(&mut self, container: &dyn Container, max: Size) -> Size {
        self.measured(container, max).size
    }

    /// Full measurement (per-item natural sizes included) for `max`
    pub fn measured(&mut self, container: &dyn Container, max: Size) -> &FlowMeasure {
        let Self {
            orientation,
            items,
            template,
            resolved,
            cache,
            ..
        } = self;
        let resolved =
            resolved.get_or_resolve(|| items.iter().map(|item| item.resolve(template)).collect());
        cache.get_or_insert_with(max, || {
            measure_items(*orientation, items, resolved, container, max)
        })
    }

    pub(crate) fn arrange_with(
        &mut self,
        container: &mut dyn Container,
        bounds: Rect,
        groups: &mut SizeGroups,
    ) {
        self.hooks.fire(ArrangePhase::Before, bounds);

        let o = self.orientation;
        let available = bounds.size().non_negative();
        let measured = self.measured(&*container, available).clone();
        let resolved = self.resolved_items().to_vec();

        // collapse state and weights are read from the measurement, not the items
        for (index, item) in self.items.iter().enumerate() {
            if measured.collapsed[index] {
                continue;
            }
            if let Some(key) = &item.size_group {
                groups.raise(key, measured.naturals[index].cross(o));
            }
        }

        let (cross_offset, cross_space) = self
            .content_align
            .place(available.cross(o), measured.size.cross(o));
        let cross_start = bounds.cross_start(o) + cross_offset;
        let flex_space = (available.axis(o) - measured.fixed_axis).max(0);
        let last_flexible = measured.weights.iter().rposition(|&w| w > 0);

        let mut pos = bounds.axis_start(o);
        let mut flex_assigned = 0;
        for (index, item) in self.items.iter_mut().enumerate() {
            let r = &resolved[index];
            let natural = measured.naturals[index];
            let weight = measured.weights[index];

            if measured.collapsed[index] {
                let rect = Rect::from_axis(o, pos, 0, cross_start, 0);
                trace!("flow item {} collapsed at {:?}", index, rect);
                item.common.target.collapse(container, rect);
                continue;
            }

            let extent = if weight > 0 {
                let share = if Some(index) == last_flexible {
                    flex_space - flex_assigned
                } else if measured.weight_total > 0 {
                    (i64::from(flex_space) * i64::from(weight) / measured.weight_total) as i32
                } else {
                    0
                };
                flex_assigned += share;
                share
            } else {
                natural.axis(o)
            };

            let (&lead, &trail) = r.padding.along(o);
            let (&cross_lead, &cross_trail) = r.padding.across(o);
            let inner_cross = (cross_space - cross_lead - cross_trail).max(0);

            // grouped items share the group's size; stretching would break that
            let group_size = item.size_group.as_deref().and_then(|key| groups.get(key));
            let (align, natural_cross) = match group_size {
                Some(size) if r.align == Align::Stretch => (Align::Start, size.min(inner_cross)),
                Some(size) => (r.align, size.min(inner_cross)),
                None => (r.align, natural.cross(o)),
            };
            let (offset, cross_len) = align.place(inner_cross, natural_cross);

            let rect = Rect::from_axis(
                o,
                pos + lead,
                extent,
                cross_start + cross_lead + offset,
                cross_len,
            );
            pos += lead + extent + trail;

            trace!("flow item {} arranged at {:?}", index, rect);
            item.common.target.place(container, rect, groups);
        }

        self.hooks.fire(ArrangePhase::After, bounds);
    }

    /// Raise group sizes for this flow and everything nested in it.
    ///
    /// Nested layouts are measured under the slot their item will get.
    pub(crate) fn collect_size_groups(
        &mut self,
        container: &dyn Container,
        max: Size,
        groups: &mut SizeGroups,
    ) {
        let o = self.orientation;
        let measured = self.measured(container, max).clone();
        let resolved = self.resolved_items().to_vec();
        let flex_space = (max.axis(o) - measured.fixed_axis).max(0);

        for (index, item) in self.items.iter_mut().enumerate() {
            if measured.collapsed[index] {
                continue;
            }
            let natural = measured.naturals[index];
            if let Some(key) = &item.size_group {
                groups.raise(key, natural.cross(o));
            }
            if let Some(nested) = item.common.target.layout_mut() {
                let r = &resolved[index];
                let slot_axis = if measured.weights[index] > 0 {
                    flex_space
                } else {
                    natural.axis(o)
                };
                let slot_cross = if r.align == Align::Stretch {
                    (max.cross(o) - r.padding.total_across(o)).max(0)
                } else {
                    natural.cross(o)
                };
                let slot = Size::from_axis(o, slot_axis, slot_cross);
                nested.collect_size_groups(container, slot, groups);
            }
        }
    }

    pub(crate) fn collapse(&mut self, container: &mut dyn Container, rect: Rect) {
        for item in &mut self.items {
            item.common.target.collapse(container, rect);
        }
    }
}

fn measure_items(
    orientation: Orientation,
    items: &mut [FlowItem],
    resolved: &[ResolvedFlowItem],
    container: &dyn Container,
    max: Size,
) -> FlowMeasure {
    let o = orientation;
    let max_axis = max.axis(o);
    let max_cross = max.cross(o);

    let mut measure = FlowMeasure {
        naturals: Vec::with_capacity(items.len()),
        collapsed: Vec::with_capacity(items.len()),
        weights: Vec::with_capacity(items.len()),
        ..Default::default()
    };
    let mut cross_total = 0;

    for (item, r) in items.iter_mut().zip(resolved) {
        measure.collapsed.push(item.common.collapsed);
        if item.common.collapsed {
            measure.naturals.push(Size::ZERO);
            measure.weights.push(0);
            continue;
        }

        let pad_axis = r.padding.total_along(o);
        let pad_cross = r.padding.total_across(o);
        let remaining = (max_axis - measure.fixed_axis - pad_axis).max(0);
        let query = Size::from_axis(o, remaining, (max_cross - pad_cross).max(0));
        let natural = item.common.natural_size(container, query, &r.size);

        measure.fixed_axis += pad_axis;
        measure.weights.push(r.weight);
        if r.is_flexible() {
            measure.weight_total += i64::from(r.weight);
        } else {
            measure.fixed_axis += natural.axis(o);
        }
        cross_total = cross_total.max(natural.cross(o) + pad_cross);
        measure.naturals.push(natural);
    }

    measure.size = Size::from_axis(o, measure.fixed_axis, cross_total);
    measure
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::domain::Edge;
    use crate::layout::anchor::AnchorLayout;
    use crate::layout::item::{AnchorItem, LayoutItem};
    use crate::layout::Layout;
    use crate::widget::{ElementId, Panel, Window};

    fn arrange(layout: &mut FlowLayout, window: &mut Window, bounds: Rect) {
        let mut groups = SizeGroups::new();
        layout.collect_size_groups(&*window, bounds.size(), &mut groups);
        layout.arrange_with(window, bounds, &mut groups);
    }

    fn panels(window: &mut Window, sizes: &[(i32, i32)]) -> Vec<ElementId> {
        sizes
            .iter()
            .map(|&(w, h)| window.add(Panel::new(w, h)))
            .collect()
    }

    #[test]
    fn test_flexible_item_takes_leftover_row_space() {
        let mut window: Window = Window::new(400, 30);
        let ids = panels(&mut window, &[(100, 20), (10, 20), (50, 20)]);
        let mut layout = FlowLayout::row()
            .with_item(FlowItem::element(ids[0]))
            .with_item(FlowItem::element(ids[1]).with_weight(1))
            .with_item(FlowItem::element(ids[2]));

        arrange(&mut layout, &mut window, Rect::new(0, 0, 400, 30));

        assert_eq!(window.bounds_of(ids[0]), Rect::new(0, 0, 100, 30));
        assert_eq!(window.bounds_of(ids[1]), Rect::new(100, 0, 350, 30));
        assert_eq!(window.bounds_of(ids[1]).width(), 250);
        assert_eq!(window.bounds_of(ids[2]), Rect::new(350, 0, 400, 30));
    }

    #[test]
    fn test_weights_split_column_space() {
        let mut window: Window = Window::new(40, 100);
        let ids = panels(&mut window, &[(10, 10), (10, 10), (10, 10)]);
        let mut layout = FlowLayout::column()
            .with_item(FlowItem::element(ids[0]).with_weight(1))
            .with_item(FlowItem::element(ids[1]).with_weight(1))
            .with_item(FlowItem::element(ids[2]).with_weight(2));

        arrange(&mut layout, &mut window, Rect::new(0, 0, 40, 100));

        let heights: Vec<i32> = ids.iter().map(|id| window.bounds_of(*id).height()).collect();
        assert_eq!(heights, vec![25, 25, 50]);
        assert_eq!(window.bounds_of(ids[2]).top, 50);
    }

    #[test]
    fn test_remainder_goes_to_last_flexible_item() {
        for space in [0, 1, 7, 100, 101, 333, 1000] {
            let mut window: Window = Window::new(space, 10);
            let ids = panels(&mut window, &[(0, 5), (0, 5), (0, 5), (0, 5)]);
            let mut layout = FlowLayout::row()
                .with_item(FlowItem::element(ids[0]).with_weight(3))
                .with_item(FlowItem::element(ids[1]).with_weight(1))
                .with_item(FlowItem::element(ids[2]).with_weight(7))
                .with_item(FlowItem::element(ids[3]));

            arrange(&mut layout, &mut window, Rect::new(0, 0, space, 10));

            let widths: Vec<i32> = ids.iter().map(|id| window.bounds_of(*id).width()).collect();
            assert_eq!(widths[0] + widths[1] + widths[2], space, "space {}", space);
            assert_eq!(widths[0], space * 3 / 11);
            assert_eq!(widths[1], space / 11);
            assert_eq!(window.bounds_of(ids[3]).left, space);
        }
    }

    #[test]
    fn test_rigid_measure_matches_arranged_extent() {
        let mut window: Window = Window::new(500, 100);
        let ids = panels(&mut window, &[(40, 10), (25, 30), (60, 20)]);
        let mut layout = FlowLayout::row()
            .with_item(FlowItem::element(ids[0]).with_uniform_padding(3))
            .with_item(FlowItem::element(ids[1]).with_padding_edge(Edge::Right, 7))
            .with_item(FlowItem::element(ids[2]));

        let size = layout.measure(&window, Size::new(500, 100));
        assert_eq!(size, Size::new(40 + 6 + 25 + 7 + 60, 30));

        arrange(&mut layout, &mut window, Rect::new(0, 0, size.width, 100));
        assert_eq!(window.bounds_of(ids[2]).right, size.width);
    }

    #[test]
    fn test_measure_queries_remaining_axis_space() {
        let mut window: Window = Window::new(100, 50);
        let ids = panels(&mut window, &[(70, 10), (70, 10)]);
        let mut layout = FlowLayout::row()
            .with_item(FlowItem::element(ids[0]))
            .with_item(FlowItem::element(ids[1]));

        let measured = layout.measured(&window, Size::new(100, 50)).clone();
        assert_eq!(measured.naturals, vec![Size::new(70, 10), Size::new(30, 10)]);
        assert_eq!(measured.size, Size::new(100, 10));
    }

    #[test]
    fn test_flexible_items_excluded_from_measured_axis() {
        let mut window: Window = Window::new(300, 50);
        let ids = panels(&mut window, &[(70, 10), (80, 40)]);
        let mut layout = FlowLayout::row()
            .with_item(FlowItem::element(ids[0]))
            .with_item(FlowItem::element(ids[1]).with_weight(2));

        let measured = layout.measured(&window, Size::new(300, 50)).clone();
        assert_eq!(measured.size, Size::new(70, 40));
        assert_eq!(measured.weight_total, 2);
    }

    #[test]
    fn test_cross_alignment_per_item() {
        let mut window: Window = Window::new(300, 100);
        let ids = panels(&mut window, &[(10, 20), (10, 20), (10, 20), (10, 20)]);
        let mut layout = FlowLayout::row()
            .with_item(FlowItem::element(ids[0]).with_align(Align::Start))
            .with_item(FlowItem::element(ids[1]).with_align(Align::Center))
            .with_item(FlowItem::element(ids[2]).with_align(Align::End))
            .with_item(
                FlowItem::element(ids[3])
                    .with_align(Align::Stretch)
                    .with_padding_edge(Edge::Top, 5)
                    .with_padding_edge(Edge::Bottom, 15),
            );

        arrange(&mut layout, &mut window, Rect::new(0, 0, 300, 100));

        assert_eq!(window.bounds_of(ids[0]), Rect::new(0, 0, 10, 20));
        assert_eq!(window.bounds_of(ids[1]), Rect::new(10, 40, 20, 60));
        assert_eq!(window.bounds_of(ids[2]), Rect::new(20, 80, 30, 100));
        // stretch fills the assigned cross size minus the item's cross padding
        assert_eq!(window.bounds_of(ids[3]), Rect::new(30, 5, 40, 85));
        assert_eq!(window.bounds_of(ids[3]).height(), 100 - 20);
    }

    #[test]
    fn test_content_alignment_offsets_flow_block() {
        let mut window: Window = Window::new(100, 100);
        let ids = panels(&mut window, &[(10, 20), (10, 40)]);
        let mut layout = FlowLayout::row()
            .with_content_align(Align::Center)
            .with_item(FlowItem::element(ids[0]).with_align(Align::Start))
            .with_item(FlowItem::element(ids[1]).with_align(Align::Stretch));

        arrange(&mut layout, &mut window, Rect::new(0, 0, 100, 100));

        assert_eq!(window.bounds_of(ids[0]), Rect::new(0, 30, 10, 50));
        assert_eq!(window.bounds_of(ids[1]), Rect::new(10, 30, 20, 70));

        layout.set_content_align(Align::End);
        arrange(&mut layout, &mut window, Rect::new(0, 0, 100, 100));
        assert_eq!(window.bounds_of(ids[1]), Rect::new(10, 60, 20, 100));
    }

    #[test]
    fn test_collapsed_item_gets_zero_rect_and_no_space() {
        let mut window: Window = Window::new(300, 20);
        let ids = panels(&mut window, &[(50, 20), (60, 20), (70, 20)]);
        let mut layout = FlowLayout::row()
            .with_item(FlowItem::element(ids[0]))
            .with_item(FlowItem::element(ids[1]))
            .with_item(FlowItem::element(ids[2]));

        assert_eq!(layout.measure(&window, Size::new(300, 20)).width, 180);

        if let Some(item) = layout.item_mut(1) {
            item.set_collapsed(true);
        }
        // not seen until the layout is invalidated
        assert_eq!(layout.measure(&window, Size::new(300, 20)).width, 180);
        layout.invalidate();
        assert_eq!(layout.measure(&window, Size::new(300, 20)).width, 120);

        arrange(&mut layout, &mut window, Rect::new(0, 0, 300, 20));
        assert_eq!(window.bounds_of(ids[1]), Rect::collapsed_at(50, 0));
        assert_eq!(window.get(ids[1]).map(|p| p.refresh_count()), Some(1));
        assert_eq!(window.bounds_of(ids[2]), Rect::new(50, 0, 120, 20));

        if let Some(item) = layout.item_mut(1) {
            item.set_collapsed(false);
        }
        layout.invalidate();
        assert_eq!(layout.measure(&window, Size::new(300, 20)).width, 180);
    }

    #[test]
    fn test_size_group_equalizes_cross_extent() {
        let mut window: Window = Window::new(200, 200);
        let ids = panels(&mut window, &[(30, 10), (80, 10), (50, 10)]);
        let mut layout = FlowLayout::column()
            .with_item(FlowItem::element(ids[0]).with_size_group("labels"))
            .with_item(FlowItem::element(ids[1]).with_size_group("labels"))
            .with_item(FlowItem::element(ids[2]));

        arrange(&mut layout, &mut window, Rect::new(0, 0, 200, 200));

        assert_eq!(window.bounds_of(ids[0]).width(), 80);
        assert_eq!(window.bounds_of(ids[1]).width(), 80);
        assert_eq!(window.bounds_of(ids[2]).width(), 200);
    }

    #[test]
    fn test_size_group_spans_nested_layouts() {
        let mut window: Window = Window::new(300, 100);
        let ids = panels(&mut window, &[(40, 10), (90, 25), (20, 10), (20, 10)]);
        let first_row = FlowLayout::row()
            .with_item(FlowItem::element(ids[0]).with_size_group("label"))
            .with_item(FlowItem::element(ids[2]).with_weight(1));
        let second_row = FlowLayout::row()
            .with_item(FlowItem::element(ids[1]).with_size_group("label"))
            .with_item(FlowItem::element(ids[3]).with_weight(1));
        let mut layout = FlowLayout::column()
            .with_item(FlowItem::layout(first_row).with_height(30))
            .with_item(FlowItem::layout(second_row).with_height(30));

        arrange(&mut layout, &mut window, Rect::new(0, 0, 300, 100));

        // rows put the group on the height, the cross axis of a row
        assert_eq!(window.bounds_of(ids[0]).height(), 25);
        assert_eq!(window.bounds_of(ids[1]).height(), 25);
        assert_eq!(window.bounds_of(ids[2]).left, 40);
        assert_eq!(window.bounds_of(ids[3]).left, 90);
    }

    #[test]
    fn test_nested_layout_arranged_inside_item_rect() {
        let mut window: Window = Window::new(200, 100);
        let ids = panels(&mut window, &[(50, 20), (30, 20), (40, 20)]);
        let inner = FlowLayout::column()
            .with_item(FlowItem::element(ids[1]))
            .with_item(FlowItem::element(ids[2]).with_weight(1));
        let mut layout = FlowLayout::row()
            .with_item(FlowItem::element(ids[0]))
            .with_item(FlowItem::layout(inner).with_weight(1).with_uniform_padding(5));

        arrange(&mut layout, &mut window, Rect::new(0, 0, 200, 100));

        assert_eq!(window.bounds_of(ids[1]), Rect::new(55, 5, 195, 25));
        assert_eq!(window.bounds_of(ids[2]), Rect::new(55, 25, 195, 95));
    }

    #[test]
    fn test_collapsed_nested_layout_collapses_children() {
        let mut window: Window = Window::new(200, 100);
        let ids = panels(&mut window, &[(50, 20), (30, 20)]);
        let inner = FlowLayout::column().with_item(FlowItem::element(ids[1]).with_height(40));
        let mut layout = FlowLayout::row()
            .with_item(FlowItem::element(ids[0]))
            .with_item(FlowItem::layout(inner).with_collapsed(true));

        arrange(&mut layout, &mut window, Rect::new(0, 0, 200, 100));
        assert_eq!(window.bounds_of(ids[1]), Rect::collapsed_at(50, 0));
    }

    #[test]
    fn test_uncollapse_without_invalidate_keeps_measured_state() {
        let mut window: Window = Window::new(100, 10);
        let ids = panels(&mut window, &[(0, 10), (0, 10)]);
        let mut layout = FlowLayout::row()
            .with_item(FlowItem::element(ids[0]).with_weight(1).with_collapsed(true))
            .with_item(FlowItem::element(ids[1]).with_weight(1).with_collapsed(true));
        let bounds = Rect::new(0, 0, 100, 10);
        arrange(&mut layout, &mut window, bounds);

        for index in 0..2 {
            if let Some(item) = layout.item_mut(index) {
                item.set_collapsed(false);
            }
        }
        arrange(&mut layout, &mut window, bounds);
        assert_eq!(window.bounds_of(ids[0]), Rect::collapsed_at(0, 0));
        assert_eq!(window.bounds_of(ids[1]), Rect::collapsed_at(0, 0));

        layout.invalidate();
        arrange(&mut layout, &mut window, bounds);
        assert_eq!(window.bounds_of(ids[0]), Rect::new(0, 0, 50, 10));
        assert_eq!(window.bounds_of(ids[1]), Rect::new(50, 0, 100, 10));
    }

    #[test]
    fn test_stale_collapse_never_yields_negative_extents() {
        let mut window: Window = Window::new(100, 10);
        let ids = panels(&mut window, &[(0, 10), (0, 10)]);
        let mut layout = FlowLayout::row()
            .with_item(FlowItem::element(ids[0]).with_weight(3).with_collapsed(true))
            .with_item(FlowItem::element(ids[1]).with_weight(1));
        let bounds = Rect::new(0, 0, 100, 10);
        arrange(&mut layout, &mut window, bounds);

        if let Some(item) = layout.item_mut(0) {
            item.set_collapsed(false);
        }
        arrange(&mut layout, &mut window, bounds);

        assert_eq!(window.bounds_of(ids[0]), Rect::collapsed_at(0, 0));
        assert_eq!(window.bounds_of(ids[1]), Rect::new(0, 0, 100, 10));
    }

    #[test]
    fn test_grouped_items_stay_inside_nested_slot() {
        let mut window: Window = Window::new(100, 100);
        let ids = panels(&mut window, &[(20, 50), (20, 10)]);
        let row = FlowLayout::row()
            .with_item(FlowItem::element(ids[0]).with_size_group("g"))
            .with_item(FlowItem::element(ids[1]).with_size_group("g"));
        let mut layout = FlowLayout::column().with_item(FlowItem::layout(row).with_height(30));

        arrange(&mut layout, &mut window, Rect::new(0, 0, 100, 100));

        assert_eq!(window.bounds_of(ids[0]), Rect::new(0, 0, 20, 30));
        assert_eq!(window.bounds_of(ids[1]), Rect::new(20, 0, 40, 30));
    }

    #[test]
    fn test_nested_anchor_layout_takes_bounding_box_extent() {
        let mut window: Window = Window::new(200, 40);
        let ids = panels(&mut window, &[(50, 20), (30, 20), (20, 10), (40, 20)]);
        let anchored = AnchorLayout::new()
            .with_item(AnchorItem::element(ids[1]).with_left(0).with_top(0))
            .with_item(AnchorItem::element(ids[2]).with_left(35).with_top(10));
        let mut layout = FlowLayout::row()
            .with_item(FlowItem::element(ids[0]))
            .with_item(FlowItem::layout(anchored))
            .with_item(FlowItem::element(ids[3]));

        // 50 + anchored box 55 + 40
        assert_eq!(layout.measure(&window, Size::new(200, 40)), Size::new(145, 20));

        arrange(&mut layout, &mut window, Rect::new(0, 0, 200, 40));

        assert_eq!(window.bounds_of(ids[1]), Rect::new(50, 0, 80, 20));
        assert_eq!(window.bounds_of(ids[2]), Rect::new(85, 10, 105, 20));
        assert_eq!(window.bounds_of(ids[3]), Rect::new(105, 0, 145, 40));
    }

    #[test]
    fn test_template_defaults_apply_to_unset_fields() {
        let mut window: Window = Window::new(200, 40);
        let ids = panels(&mut window, &[(20, 10), (20, 10)]);
        let mut layout = FlowLayout::row()
            .with_template(FlowItem::new().with_uniform_padding(2).with_align(Align::Start))
            .with_item(FlowItem::element(ids[0]))
            .with_item(FlowItem::element(ids[1]).with_uniform_padding(0));

        arrange(&mut layout, &mut window, Rect::new(0, 0, 200, 40));

        assert_eq!(window.bounds_of(ids[0]), Rect::new(2, 2, 22, 12));
        assert_eq!(window.bounds_of(ids[1]), Rect::new(24, 0, 44, 10));
    }

    #[test]
    fn test_hooks_fire_once_around_arrange() {
        let mut window: Window = Window::new(100, 20);
        let id = window.add(Panel::new(10, 10));
        let events = Rc::new(RefCell::new(Vec::new()));
        let seen = events.clone();
        let mut layout = FlowLayout::row()
            .with_item(FlowItem::element(id))
            .with_hook(move |phase, rect| seen.borrow_mut().push((phase, rect)));

        arrange(&mut layout, &mut window, Rect::new(0, 0, 100, 20));

        let bounds = Rect::new(0, 0, 100, 20);
        assert_eq!(
            *events.borrow(),
            vec![(ArrangePhase::Before, bounds), (ArrangePhase::After, bounds)]
        );
    }

    #[test]
    fn test_bind_resolves_named_items() {
        let mut window: Window = Window::new(100, 20);
        let id = window.add(Panel::new(10, 10).with_name("ok"));
        let mut layout = FlowLayout::row().with_item(FlowItem::named("ok"));

        layout.bind(&window).unwrap();
        assert_eq!(layout.items()[0].target().element_id(), Some(id));

        let mut broken = FlowLayout::row().with_item(FlowItem::layout(
            FlowLayout::column().with_item(FlowItem::named("cancel")),
        ));
        assert_eq!(
            broken.bind(&window),
            Err(LayoutError::UnresolvedName {
                name: "cancel".to_string()
            })
        );
    }

    #[test]
    fn test_failed_bind_leaves_items_unbound() {
        let mut window: Window = Window::new(100, 20);
        window.add(Panel::new(10, 10).with_name("ok"));
        let mut layout = FlowLayout::row()
            .with_item(FlowItem::named("ok"))
            .with_item(FlowItem::named("missing"));

        assert!(layout.bind(&window).is_err());
        assert_eq!(layout.items()[0].target().element_id(), None);
    }

    #[test]
    fn test_insert_and_remove_check_bounds() {
        let mut layout = FlowLayout::row();
        assert!(layout.insert(0, FlowItem::new()).is_ok());
        assert_eq!(
            layout.insert(5, FlowItem::new()),
            Err(LayoutError::IndexOutOfRange { index: 5, len: 1 })
        );
        assert!(layout.remove(0).is_ok());
        assert!(layout.is_empty());
        assert!(matches!(
            layout.remove(0),
            Err(LayoutError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_clone_is_independent() {
        let inner = FlowLayout::column().with_item(FlowItem::new().with_height(5));
        let original = Layout::from(FlowLayout::row().with_item(FlowItem::layout(inner)));
        let mut copy = original.clone();

        if let Layout::Flow(flow) = &mut copy {
            flow.clear();
        }
        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 0);
    }
}
