//! Select widget - a dropdown listbox with controllable selection.

mod events;
pub mod item;
mod parts;
mod state;

pub use item::SelectOption;
pub use parts::{
    SelectIcon, SelectItem, SelectPopup, SelectTrigger, SelectValue, DEFAULT_ICON,
};
pub use state::Select;
