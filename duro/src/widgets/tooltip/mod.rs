//! Tooltip widget - hover/focus triggered description with a show delay.

mod parts;
mod state;

pub use parts::{TooltipPopup, TooltipTrigger};
pub use state::Tooltip;
