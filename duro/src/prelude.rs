//! Prelude module for convenient imports.
//!
//! ```ignore
//! use duro::prelude::*;
//! ```

// Roots, options and plumbing
pub use crate::config::{
    Defaults, GroupOptions, MenuAlign, Placement, ScrollAreaOptions, SelectOptions,
    SideNavOptions, TabsOptions, TooltipOptions,
};
pub use crate::error::{Error, Result};
pub use crate::scope::Scope;
pub use crate::theme::{ThemeName, ThemeProvider};

// Widgets and parts
pub use crate::widgets::*;

// Interaction primitives used in widget signatures
pub use duro_core::{
    Attrs, EventResult, Key, KeyCombo, Modifiers, Orientation, ScrollMetrics, ThumbGeometry,
};
