//! Rect value object - Rectangle representation
//!
//! Rectangles are used for container client areas and arranged item bounds.
//! Coordinates are integer layout units.

use super::dimensions::Size;
use super::orientation::Orientation;

/// A rectangle defined by its bounds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Create a new rectangle from bounds
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from position and size
    pub fn from_pos_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    /// Create a rectangle at the origin with the given size
    pub fn from_size(size: Size) -> Self {
        Self::from_pos_size(0, 0, size.width, size.height)
    }

    /// Degenerate rectangle at a point, used for collapsed items
    pub fn collapsed_at(x: i32, y: i32) -> Self {
        Self::new(x, y, x, y)
    }

    /// Create a rectangle from spans along and across an orientation's axis
    pub fn from_axis(
        orientation: Orientation,
        axis_pos: i32,
        axis_len: i32,
        cross_pos: i32,
        cross_len: i32,
    ) -> Self {
        match orientation {
            Orientation::Horizontal => Self::from_pos_size(axis_pos, cross_pos, axis_len, cross_len),
            Orientation::Vertical => Self::from_pos_size(cross_pos, axis_pos, cross_len, axis_len),
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Near edge along the orientation's axis (left for rows, top for columns)
    pub fn axis_start(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.left,
            Orientation::Vertical => self.top,
        }
    }

    /// Near edge across the orientation's axis
    pub fn cross_start(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.top,
            Orientation::Vertical => self.left,
        }
    }

    /// Get union (bounding box) with another rectangle
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }
}
