//! Widget options and library-wide defaults.
//!
//! Every compound root takes an options builder. Builders start from
//! [`Defaults`], which a host may load from JSON or TOML.

use std::time::Duration;

use duro_core::{ChangeCallback, Orientation, MIN_THUMB_PERCENT};
use serde::{Deserialize, Serialize};

use crate::theme::ThemeName;

/// Where a tooltip is placed relative to its trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Placement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Bottom => "bottom",
            Placement::Left => "left",
            Placement::Right => "right",
        }
    }
}

/// Horizontal alignment of a menu popup against its trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuAlign {
    #[default]
    Start,
    End,
}

impl MenuAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuAlign::Start => "start",
            MenuAlign::End => "end",
        }
    }
}

/// Library-wide defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Defaults {
    /// Tooltip show delay in milliseconds.
    pub tooltip_delay_ms: u64,
    pub tooltip_placement: Placement,
    pub tabs_orientation: Orientation,
    /// How long a scroll area counts as scrolling after the last scroll event.
    pub scroll_quiescence_ms: u64,
    /// Minimum scrollbar thumb size, percent of the track.
    pub min_thumb_percent: f32,
    pub theme: ThemeName,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            tooltip_delay_ms: 300,
            tooltip_placement: Placement::Top,
            tabs_orientation: Orientation::Horizontal,
            scroll_quiescence_ms: 1000,
            min_thumb_percent: MIN_THUMB_PERCENT,
            theme: ThemeName::Dark,
        }
    }
}

// =============================================================================
// Tooltip
// =============================================================================

/// Options for [`crate::widgets::Tooltip`].
#[derive(Debug, Clone)]
pub struct TooltipOptions {
    pub content: String,
    pub placement: Placement,
    pub delay: Duration,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self::from_defaults(&Defaults::default())
    }
}

impl TooltipOptions {
    pub fn new(content: impl Into<String>) -> Self {
        Self::default().content(content)
    }

    pub fn from_defaults(defaults: &Defaults) -> Self {
        Self {
            content: String::new(),
            placement: defaults.tooltip_placement,
            delay: Duration::from_millis(defaults.tooltip_delay_ms),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay_ms(self, millis: u64) -> Self {
        self.delay(Duration::from_millis(millis))
    }
}

// =============================================================================
// Value-carrying widgets
// =============================================================================

/// Options for [`crate::widgets::Tabs`].
#[derive(Clone, Default)]
pub struct TabsOptions {
    pub value: Option<String>,
    pub default_value: Option<String>,
    pub on_value_change: Option<ChangeCallback<String>>,
    pub orientation: Orientation,
}

impl TabsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_defaults(defaults: &Defaults) -> Self {
        Self {
            orientation: defaults.tabs_orientation,
            ..Self::default()
        }
    }

    /// Controlled value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn on_value_change(mut self, callback: impl Fn(&String) + Send + Sync + 'static) -> Self {
        self.on_value_change = Some(std::sync::Arc::new(callback));
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}

/// Options for [`crate::widgets::Select`].
#[derive(Clone, Default)]
pub struct SelectOptions {
    pub value: Option<String>,
    pub default_value: Option<String>,
    pub on_value_change: Option<ChangeCallback<String>>,
    pub placeholder: String,
    /// Form field name for the submitted value.
    pub name: Option<String>,
}

impl SelectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controlled value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn on_value_change(mut self, callback: impl Fn(&String) + Send + Sync + 'static) -> Self {
        self.on_value_change = Some(std::sync::Arc::new(callback));
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Options for [`crate::widgets::SideNav`].
#[derive(Clone, Default)]
pub struct SideNavOptions {
    pub value: Option<String>,
    pub default_value: Option<String>,
    pub on_value_change: Option<ChangeCallback<String>>,
}

impl SideNavOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controlled value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn on_value_change(mut self, callback: impl Fn(&String) + Send + Sync + 'static) -> Self {
        self.on_value_change = Some(std::sync::Arc::new(callback));
        self
    }
}

/// Options for a [`crate::widgets::SideNavGroup`].
#[derive(Debug, Clone, Default)]
pub struct GroupOptions {
    pub label: String,
    /// Key used to track expansion. Defaults to the label.
    pub group_key: Option<String>,
    pub default_expanded: bool,
}

impl GroupOptions {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn group_key(mut self, key: impl Into<String>) -> Self {
        self.group_key = Some(key.into());
        self
    }

    pub fn default_expanded(mut self, expanded: bool) -> Self {
        self.default_expanded = expanded;
        self
    }

    /// The effective group key.
    pub fn key(&self) -> &str {
        self.group_key.as_deref().unwrap_or(&self.label)
    }
}

// =============================================================================
// ScrollArea
// =============================================================================

/// Options for [`crate::widgets::ScrollArea`].
#[derive(Debug, Clone)]
pub struct ScrollAreaOptions {
    /// Maximum viewport height; `None` lets the viewport grow.
    pub max_height: Option<f32>,
    pub quiescence: Duration,
    pub min_thumb_percent: f32,
}

impl Default for ScrollAreaOptions {
    fn default() -> Self {
        Self::from_defaults(&Defaults::default())
    }
}

impl ScrollAreaOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_defaults(defaults: &Defaults) -> Self {
        Self {
            max_height: None,
            quiescence: Duration::from_millis(defaults.scroll_quiescence_ms),
            min_thumb_percent: defaults.min_thumb_percent,
        }
    }

    pub fn max_height(mut self, max_height: f32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn quiescence(mut self, quiescence: Duration) -> Self {
        self.quiescence = quiescence;
        self
    }

    pub fn min_thumb_percent(mut self, percent: f32) -> Self {
        self.min_thumb_percent = percent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let defaults = Defaults::default();
        assert_eq!(defaults.tooltip_delay_ms, 300);
        assert_eq!(defaults.scroll_quiescence_ms, 1000);
        assert_eq!(TooltipOptions::default().delay, Duration::from_millis(300));
        assert_eq!(TooltipOptions::default().placement, Placement::Top);
    }

    #[test]
    fn test_partial_json_keeps_remaining_defaults() {
        let defaults: Defaults = serde_json::from_str(
            r#"{"tooltip-delay-ms": 800, "tooltip-placement": "bottom", "theme": "high-contrast"}"#,
        )
        .unwrap();
        assert_eq!(defaults.tooltip_delay_ms, 800);
        assert_eq!(defaults.tooltip_placement, Placement::Bottom);
        assert_eq!(defaults.theme, ThemeName::HighContrast);
        assert_eq!(defaults.tabs_orientation, Orientation::Horizontal);
        assert_eq!(defaults.scroll_quiescence_ms, 1000);

        let tooltip = TooltipOptions::from_defaults(&defaults);
        assert_eq!(tooltip.delay, Duration::from_millis(800));
    }

    #[test]
    fn test_group_key_falls_back_to_label() {
        assert_eq!(GroupOptions::new("Settings").key(), "Settings");
        assert_eq!(GroupOptions::new("Settings").group_key("cfg").key(), "cfg");
    }
}
