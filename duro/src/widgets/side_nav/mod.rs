//! SideNav widget - grouped navigation items with collapsible groups.
//!
//! Navigation is pointer driven; there is no roving highlight. The active
//! item follows the value, and the group containing the active item is
//! expanded whenever the value changes.

mod parts;
mod state;

pub use parts::{SideNavGroup, SideNavItem};
pub use state::SideNav;
