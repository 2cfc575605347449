//! Theme selection.
//!
//! Only the theme's name travels through the scope; token values belong to
//! the renderer.

use serde::{Deserialize, Serialize};

use crate::scope::Scope;

/// Built-in themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
    HighContrast,
}

impl ThemeName {
    /// Value for the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Dark => "dark",
            ThemeName::Light => "light",
            ThemeName::HighContrast => "high-contrast",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scope entry installed by [`ThemeProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeProvider {
    pub theme: ThemeName,
}

impl ThemeProvider {
    pub fn new(theme: ThemeName) -> Self {
        Self { theme }
    }

    /// Child scope in which `current()` reports this theme.
    pub fn provide(&self, scope: &Scope) -> Scope {
        log::debug!("[theme] providing {}", self.theme);
        scope.provide(*self)
    }
}

/// The theme in effect for `scope`; dark when no provider is present.
pub fn current(scope: &Scope) -> ThemeName {
    scope
        .get::<ThemeProvider>()
        .map(|provider| provider.theme)
        .unwrap_or_default()
}
