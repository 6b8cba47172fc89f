//! Dimension value objects - Size and four-sided Edges

use serde::{Deserialize, Serialize};

use super::orientation::Orientation;

/// Size with width and height in layout units
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    /// Create a new size
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Build a size from an axis extent and a cross extent
    pub fn from_axis(orientation: Orientation, axis: i32, cross: i32) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(axis, cross),
            Orientation::Vertical => Self::new(cross, axis),
        }
    }

    /// Extent along the orientation's axis
    pub fn axis(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Extent across the orientation's axis
    pub fn cross(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.height,
            Orientation::Vertical => self.width,
        }
    }

    /// Clamp negative dimensions to zero
    pub fn non_negative(&self) -> Size {
        Size::new(self.width.max(0), self.height.max(0))
    }

    /// Constrain this size to fit within max bounds
    pub fn constrain(&self, max: Size) -> Size {
        Size {
            width: self.width.min(max.width),
            height: self.height.min(max.height),
        }
    }
}

/// One side of a box
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Top, Edge::Right, Edge::Bottom];
}

/// A value for each of the four sides of a box
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Edges<T> {
    pub left: T,
    pub top: T,
    pub right: T,
    pub bottom: T,
}

impl<T> Edges<T> {
    pub fn new(left: T, top: T, right: T, bottom: T) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn get(&self, edge: Edge) -> &T {
        match edge {
            Edge::Left => &self.left,
            Edge::Top => &self.top,
            Edge::Right => &self.right,
            Edge::Bottom => &self.bottom,
        }
    }

    pub fn get_mut(&mut self, edge: Edge) -> &mut T {
        match edge {
            Edge::Left => &mut self.left,
            Edge::Top => &mut self.top,
            Edge::Right => &mut self.right,
            Edge::Bottom => &mut self.bottom,
        }
    }

    /// Leading and trailing values along an orientation's axis
    pub fn along(&self, orientation: Orientation) -> (&T, &T) {
        match orientation {
            Orientation::Horizontal => (&self.left, &self.right),
            Orientation::Vertical => (&self.top, &self.bottom),
        }
    }

    /// Leading and trailing values across an orientation's axis
    pub fn across(&self, orientation: Orientation) -> (&T, &T) {
        self.along(orientation.flip())
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Edges<U> {
        Edges {
            left: f(self.left),
            top: f(self.top),
            right: f(self.right),
            bottom: f(self.bottom),
        }
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        [
            &mut self.left,
            &mut self.top,
            &mut self.right,
            &mut self.bottom,
        ]
        .into_iter()
    }
}

impl<T: Copy> Edges<T> {
    /// Same value on every side
    pub fn uniform(value: T) -> Self {
        Self::new(value, value, value, value)
    }
}

impl<T: Clone> Edges<Option<T>> {
    /// Fill every unset side from `fallback`, keeping explicit values
    pub fn or(&self, fallback: &Edges<Option<T>>) -> Edges<Option<T>> {
        Edges {
            left: self.left.clone().or_else(|| fallback.left.clone()),
            top: self.top.clone().or_else(|| fallback.top.clone()),
            right: self.right.clone().or_else(|| fallback.right.clone()),
            bottom: self.bottom.clone().or_else(|| fallback.bottom.clone()),
        }
    }
}

impl Edges<i32> {
    /// Sum of leading and trailing values along an axis
    pub fn total_along(&self, orientation: Orientation) -> i32 {
        let (lead, trail) = self.along(orientation);
        lead + trail
    }

    /// Sum of leading and trailing values across an axis
    pub fn total_across(&self, orientation: Orientation) -> i32 {
        let (lead, trail) = self.across(orientation);
        lead + trail
    }
}
