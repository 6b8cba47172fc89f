//! Flowanchor - declarative flow and anchor layouts for element trees
//!
//! Layout trees are declared with item builders, bound once to a
//! [`widget::Container`] to resolve element names, then measured and
//! arranged whenever the container's client area changes.
//!
//! ```
//! use flowanchor::{Container, FlowItem, FlowLayout, Layout, Panel, Rect, Window};
//!
//! let mut window: Window = Window::new(400, 40);
//! window.add(Panel::new(80, 24).with_name("ok"));
//!
//! let mut layout = Layout::from(
//!     FlowLayout::row()
//!         .with_item(FlowItem::new().with_weight(1))
//!         .with_item(FlowItem::named("ok")),
//! );
//! layout.bind(&window).unwrap();
//! window.layout(&mut layout);
//!
//! let ok = window.element_by_name("ok").unwrap();
//! assert_eq!(window.bounds_of(ok), Rect::new(320, 0, 400, 40));
//! ```

pub mod domain;
pub mod layout;
pub mod shared;
pub mod widget;

pub use domain::{Align, Edge, Edges, ItemKind, LayoutError, LayoutResult, Orientation, Rect, Size};
pub use layout::{
    AnchorDecl, AnchorItem, AnchorLayout, AnchorRef, AnchorTable, ArrangeHook, ArrangePhase,
    FlowItem, FlowLayout, Item, Layout, LayoutItem,
};
pub use shared::config::{ConfigError, LayoutConfig};
pub use widget::{Container, Element, ElementId, Panel, Window};
