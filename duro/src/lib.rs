//! Compound UI widgets built on the `duro-core` interaction primitives.
//!
//! Widgets here are headless: they own interaction state (open/close,
//! highlight, selection, scroll activity) and describe the attributes of
//! their parts, while rendering stays with the host.

pub mod config;
pub mod error;
pub mod id;
pub mod prelude;
pub mod scope;
pub mod theme;
pub mod timer;
pub mod widgets;

pub use config::{Defaults, MenuAlign, Placement};
pub use error::{Error, Result};
pub use id::WidgetId;
pub use scope::Scope;
pub use theme::{ThemeName, ThemeProvider};
pub use timer::{DelayTimer, TimerToken};

pub use duro_core;
