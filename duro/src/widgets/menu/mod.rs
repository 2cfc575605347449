//! Menu widget - a trigger button opening a list of actions and links.
//!
//! Parts: [`Menu`] (root), [`MenuTrigger`], [`MenuPopup`], [`MenuItem`] and
//! [`MenuLinkItem`]. Parts find their root through the [`Scope`] the root
//! provides.
//!
//! Opening is two-phase: `open`/`toggle` arm the initial highlight, items
//! mount and register, then the host calls [`Menu::settle`] once the render
//! pass is done. Key handling settles first, so a key arriving before the
//! host got around to it still sees the highlight.
//!
//! [`Scope`]: crate::scope::Scope

mod events;
mod parts;
mod state;

pub use parts::{MenuItem, MenuLinkItem, MenuPopup, MenuTrigger};
pub use state::{Menu, MenuAction};
