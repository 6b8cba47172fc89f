//! Panel widget - leaf element with a fixed preferred size

use crate::domain::{Rect, Size};

use super::Element;

/// A leaf element that reports a fixed preferred size
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Panel {
    /// Lookup name (for named layout items)
    name: Option<String>,
    /// Size reported to layouts, clamped to the query's maximum
    preferred: Size,
    /// Bounds from the last arrange
    bounds: Rect,
    /// Number of refresh requests received
    refreshes: u32,
}

impl Panel {
    /// Create a panel with a preferred size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            preferred: Size::new(width, height),
            ..Default::default()
        }
    }

    /// Set the lookup name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the initial bounds
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn set_preferred(&mut self, size: Size) {
        self.preferred = size;
    }

    pub fn preferred(&self) -> Size {
        self.preferred
    }

    /// How many times a layout asked this panel to redraw
    pub fn refresh_count(&self) -> u32 {
        self.refreshes
    }
}

impl Element for Panel {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn preferred_size(&self, max: Size) -> Size {
        self.preferred.constrain(max.non_negative())
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_preferred_size_is_clamped() {
        let panel = Panel::new(120, 30).with_name("status");

        assert_eq!(panel.name(), Some("status"));
        assert_eq!(panel.preferred_size(Size::new(500, 500)), Size::new(120, 30));
        assert_eq!(panel.preferred_size(Size::new(80, 500)), Size::new(80, 30));
        assert_eq!(panel.preferred_size(Size::new(-5, 10)), Size::new(0, 10));
    }

    #[test]
    fn test_panel_records_bounds_and_refreshes() {
        let mut panel = Panel::new(10, 10);
        panel.set_bounds(Rect::new(1, 2, 3, 4));
        panel.refresh();
        panel.refresh();

        assert_eq!(panel.bounds(), Rect::new(1, 2, 3, 4));
        assert_eq!(panel.refresh_count(), 2);
    }
}
