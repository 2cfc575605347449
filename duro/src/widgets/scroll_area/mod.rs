//! ScrollArea widget - a viewport with overlay scrollbars.
//!
//! The host reports viewport measurements; the widget derives thumb geometry
//! from them and turns thumb drags into scroll offsets. Scrollbars are shown
//! while scrolling and for a quiescence window after the last scroll event.

mod events;
mod parts;
mod state;

pub use parts::{ScrollAreaContent, ScrollAreaScrollbar, ScrollAreaThumb, ScrollAreaViewport};
pub use state::ScrollArea;
