//! Anchor layout - items pinned by edge gaps
//!
//! Each axis of an item is resolved on its own from which of its two
//! opposing gaps are set:
//!
//! - both: the gaps fix both edges and the item's own size is ignored
//! - trailing only: the far edge is fixed, the item grows toward the start
//! - leading only, or neither: the near edge is fixed (gap 0 when unset)
//!
//! A gap is measured from the container edge, or from the matching edge of
//! a target element. Targets inside the same layout must come earlier in
//! the item list; later or circular targets see stale bounds.

use std::collections::HashMap;

use log::{debug, trace, warn};

use crate::domain::{Edge, LayoutError, LayoutResult, Rect, Size};
use crate::shared::config::LayoutConfig;
use crate::widget::{Container, ElementId};

use super::cache::MeasureCache;
use super::defaults::{ResolvedAnchorItem, ResolvedCache};
use super::groups::SizeGroups;
use super::item::{AnchorItem, AnchorRef, ItemTarget};
use super::{ArrangePhase, Hooks};

/// Items positioned independently by anchored edges
#[derive(Clone, Debug, Default)]
pub struct AnchorLayout {
    items: Vec<AnchorItem>,
    template: AnchorItem,
    resolved: ResolvedCache<ResolvedAnchorItem>,
    cache: MeasureCache<Size>,
    hooks: Hooks,
}

impl AnchorLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor layout whose item template comes from config
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            template: config.anchor.template(),
            ..Default::default()
        }
    }

    pub fn with_item(mut self, item: AnchorItem) -> Self {
        self.push(item);
        self
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = AnchorItem>) -> Self {
        for item in items {
            self.push(item);
        }
        self
    }

    pub fn with_template(mut self, template: AnchorItem) -> Self {
        self.set_template(template);
        self
    }

    pub fn with_hook(mut self, hook: impl Fn(ArrangePhase, Rect) + 'static) -> Self {
        self.add_hook(hook);
        self
    }

    pub fn add_hook(&mut self, hook: impl Fn(ArrangePhase, Rect) + 'static) {
        self.hooks.add(hook);
    }

    pub fn template(&self) -> &AnchorItem {
        &self.template
    }

    pub fn set_template(&mut self, template: AnchorItem) {
        self.template = template;
        self.invalidate();
    }

    pub fn items(&self) -> &[AnchorItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&AnchorItem> {
        self.items.get(index)
    }

    /// Edit an item in place. The layout is not invalidated.
    pub fn item_mut(&mut self, index: usize) -> Option<&mut AnchorItem> {
        self.items.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: AnchorItem) {
        self.items.push(item);
        self.invalidate();
    }

    pub fn insert(&mut self, index: usize, item: AnchorItem) -> LayoutResult<()> {
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

    pub fn remove(&mut self, index: usize) -> LayoutResult<AnchorItem> {
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

    /// Resolve item names and anchor targets against the container.
    ///
    /// Nothing changes unless every name resolves.
    pub fn bind(&mut self, container: &dyn Container) -> LayoutResult<()> {
        let mut items = self.items.clone();
        for item in &mut items {
            item.bind(container)?;
        }
        self.items = items;
        self.invalidate();
        debug!("Bound anchor layout with {} items", self.items.len());
        Ok(())
    }

    /// Items merged with the template, memoized
    pub fn resolved_items(&mut self) -> &[ResolvedAnchorItem] {
        let Self {
            items,
            template,
            resolved,
            ..
        } = self;
        resolved.get_or_resolve(|| items.iter().map(|item| item.resolve(template)).collect())
    }

    /// Size of the bounding box of all items placed in a `max`-sized frame
    pub fn measure(&mut self, container: &dyn Container, max: Size) -> Size {
        let Self {
            items,
            template,
            resolved,
            cache,
            ..
        } = self;
        let resolved =
            resolved.get_or_resolve(|| items.iter().map(|item| item.resolve(template)).collect());
        *cache.get_or_insert_with(max, || {
            let rects = resolve_rects(items, resolved, container, Rect::from_size(max));
            items
                .iter()
                .zip(&rects)
                .filter(|(item, _)| !item.common.collapsed)
                .map(|(_, rect)| *rect)
                .reduce(|acc, rect| acc.union(&rect))
                .map(|bbox| bbox.size().non_negative())
                .unwrap_or(Size::ZERO)
        })
    }

    pub(crate) fn arrange_with(
        &mut self,
        container: &mut dyn Container,
        bounds: Rect,
        groups: &mut SizeGroups,
    ) {
        self.hooks.fire(ArrangePhase::Before, bounds);

        let resolved = self.resolved_items().to_vec();
        let rects = resolve_rects(&mut self.items, &resolved, &*container, bounds);

        for (index, (item, rect)) in self.items.iter_mut().zip(rects).enumerate() {
            if item.common.collapsed {
                trace!("anchor item {} collapsed at {:?}", index, rect);
                item.common.target.collapse(container, rect);
            } else {
                trace!("anchor item {} arranged at {:?}", index, rect);
                item.common.target.place(container, rect, groups);
            }
        }

        self.hooks.fire(ArrangePhase::After, bounds);
    }

    /// Nested layouts are measured under the rect their item resolves to in `max`
    pub(crate) fn collect_size_groups(
        &mut self,
        container: &dyn Container,
        max: Size,
        groups: &mut SizeGroups,
    ) {
        let resolved = self.resolved_items().to_vec();
        let rects = resolve_rects(&mut self.items, &resolved, container, Rect::from_size(max));
        for (item, rect) in self.items.iter_mut().zip(rects) {
            if item.common.collapsed {
                continue;
            }
            if let Some(nested) = item.common.target.layout_mut() {
                nested.collect_size_groups(container, rect.size().non_negative(), groups);
            }
        }
    }

    pub(crate) fn collapse(&mut self, container: &mut dyn Container, rect: Rect) {
        for item in &mut self.items {
            item.common.target.collapse(container, rect);
        }
    }
}

/// Compute every item's rectangle inside `frame`, in item order.
///
/// Collapsed items get a zero-size rectangle at their near corner.
fn resolve_rects(
    items: &mut [AnchorItem],
    resolved: &[ResolvedAnchorItem],
    container: &dyn Container,
    frame: Rect,
) -> Vec<Rect> {
    let mut placed: HashMap<ElementId, Rect> = HashMap::new();
    let mut rects = Vec::with_capacity(items.len());

    for (item, r) in items.iter_mut().zip(resolved) {
        let reference = |edge: Edge| -> i32 {
            let rect = match item.targets.get(edge) {
                Some(AnchorRef::Element(id)) => placed
                    .get(id)
                    .copied()
                    .or_else(|| container.element(*id).map(|e| e.bounds()))
                    .unwrap_or(frame),
                Some(AnchorRef::Named(name)) => {
                    warn!("Anchor target '{}' used before the layout was bound", name);
                    frame
                }
                None => frame,
            };
            match edge {
                Edge::Left => rect.left,
                Edge::Top => rect.top,
                Edge::Right => rect.right,
                Edge::Bottom => rect.bottom,
            }
        };
        let horizontal = (reference(Edge::Left), reference(Edge::Right));
        let vertical = (reference(Edge::Top), reference(Edge::Bottom));

        let gaps = &r.gaps;
        let pinned = |lead: Option<i32>, trail: Option<i32>| lead.is_some() && trail.is_some();
        let natural = if pinned(gaps.left, gaps.right) && pinned(gaps.top, gaps.bottom) {
            Size::ZERO
        } else {
            item.common.natural_size(container, frame.size().non_negative(), &r.size)
        };

        let (left, right) = span(gaps.left, gaps.right, horizontal, natural.width);
        let (top, bottom) = span(gaps.top, gaps.bottom, vertical, natural.height);
        let rect = if item.common.collapsed {
            Rect::collapsed_at(left, top)
        } else {
            Rect::new(left, top, right, bottom)
        };

        if let ItemTarget::Element(id) = item.common.target {
            placed.insert(id, rect);
        }
        rects.push(rect);
    }

    rects
}

/// Near and far edge along one axis
fn span(lead: Option<i32>, trail: Option<i32>, reference: (i32, i32), natural: i32) -> (i32, i32) {
    let (lead_ref, trail_ref) = reference;
    match (lead, trail) {
        (Some(lead), Some(trail)) => {
            let near = lead_ref + lead;
            (near, (trail_ref - trail).max(near))
        }
        (None, Some(trail)) => {
            let far = trail_ref - trail;
            (far - natural, far)
        }
        (lead, None) => {
            let near = lead_ref + lead.unwrap_or(0);
            (near, near + natural)
        }
    }
}
