//! Orientation and alignment enums shared by the layout engines

use serde::{Deserialize, Serialize};

/// Primary direction of a flow layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Items laid out in a row
    #[default]
    Horizontal,
    /// Items laid out in a column
    Vertical,
}

impl Orientation {
    /// The perpendicular orientation
    pub fn flip(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Cross-axis alignment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    Center,
    End,
    Stretch,
    /// Defer to the layout's item template
    #[default]
    Default,
}

impl Align {
    /// Use `fallback` when this alignment is `Default`
    pub fn or(self, fallback: Align) -> Align {
        match self {
            Align::Default => fallback,
            other => other,
        }
    }

    /// Final alignment once every template has been consulted
    pub fn resolved(self) -> Align {
        self.or(Align::Stretch)
    }

    /// Offset and extent of content with natural extent `natural` inside `space`.
    ///
    /// `Stretch` fills the space. Start/Center/End keep the natural extent.
    pub fn place(self, space: i32, natural: i32) -> (i32, i32) {
        match self.resolved() {
            Align::Start => (0, natural),
            Align::Center => ((space - natural) / 2, natural),
            Align::End => (space - natural, natural),
            Align::Stretch | Align::Default => (0, space),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_place() {
        assert_eq!(Align::Start.place(100, 30), (0, 30));
        assert_eq!(Align::Center.place(100, 30), (35, 30));
        assert_eq!(Align::End.place(100, 30), (70, 30));
        assert_eq!(Align::Stretch.place(100, 30), (0, 100));
        assert_eq!(Align::Default.place(100, 30), (0, 100));
    }

    #[test]
    fn test_align_default_falls_back() {
        assert_eq!(Align::Default.or(Align::End), Align::End);
        assert_eq!(Align::Center.or(Align::End), Align::Center);
    }
}
