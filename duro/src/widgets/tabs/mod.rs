//! Tabs widget - a tab list selecting which panel is shown.
//!
//! Tabs have no disclosure: the active tab is the selection, and arrow keys
//! along the list's orientation select the next enabled tab directly.

mod parts;
mod state;

pub use parts::{Tab, TabList, TabPanel};
pub use state::Tabs;
