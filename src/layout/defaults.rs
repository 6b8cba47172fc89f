//! Defaulting resolver
//!
//! Merges each item with its layout's item template. Unset fields take the
//! template's value, explicit values (zero included) are kept. The merged
//! list is memoized until the layout is invalidated.

use crate::domain::{Align, Edges};

use super::item::{AnchorItem, FlowItem, ItemCommon};

/// Resolved sizing attributes shared by both item kinds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizeSpec {
    /// Explicit width; `None` asks the target for its preferred width
    pub width: Option<i32>,
    /// Explicit height; `None` asks the target for its preferred height
    pub height: Option<i32>,
    pub min_width: i32,
    pub min_height: i32,
}

impl ItemCommon {
    pub(crate) fn size_spec(&self, template: &ItemCommon) -> SizeSpec {
        SizeSpec {
            width: self.width.or(template.width),
            height: self.height.or(template.height),
            min_width: self.min_width.or(template.min_width).unwrap_or(0),
            min_height: self.min_height.or(template.min_height).unwrap_or(0),
        }
    }
}

/// A flow item with every default applied
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolvedFlowItem {
    pub size: SizeSpec,
    pub padding: Edges<i32>,
    pub weight: u32,
    /// Never `Align::Default`
    pub align: Align,
}

impl ResolvedFlowItem {
    pub fn is_flexible(&self) -> bool {
        self.weight > 0
    }
}

impl FlowItem {
    /// Merge this item with `template` without touching either
    pub fn resolve(&self, template: &FlowItem) -> ResolvedFlowItem {
        ResolvedFlowItem {
            size: self.common.size_spec(&template.common),
            padding: self.padding.or(&template.padding).map(|p| p.unwrap_or(0)),
            weight: self.weight.or(template.weight).unwrap_or(0),
            align: self.align.or(template.align).resolved(),
        }
    }
}

/// An anchor item with every default applied
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolvedAnchorItem {
    pub size: SizeSpec,
    /// Still tri-state: unset gaps mean "not anchored"
    pub gaps: Edges<Option<i32>>,
}

impl AnchorItem {
    /// Merge this item with `template` without touching either
    pub fn resolve(&self, template: &AnchorItem) -> ResolvedAnchorItem {
        ResolvedAnchorItem {
            size: self.common.size_spec(&template.common),
            gaps: self.gaps.or(&template.gaps),
        }
    }
}

/// Memoized resolution of a layout's item list
#[derive(Clone, Debug)]
pub struct ResolvedCache<R> {
    resolved: Option<Vec<R>>,
}

impl<R> Default for ResolvedCache<R> {
    fn default() -> Self {
        Self { resolved: None }
    }
}

impl<R> ResolvedCache<R> {
    /// Return the memoized list, resolving it first if needed
    pub fn get_or_resolve(&mut self, resolve: impl FnOnce() -> Vec<R>) -> &[R] {
        self.resolved.get_or_insert_with(resolve)
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    pub fn invalidate(&mut self) {
        self.resolved = None;
    }
}
