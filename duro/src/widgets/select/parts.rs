//! Select parts: trigger, value, icon, popup and items.

use duro_core::{is_trigger_key, Attrs, Disposer, EventResult, KeyCombo};

use super::item::SelectOption;
use super::Select;
use crate::error::Result;
use crate::scope::Scope;

const ROOT: &str = "Select.Root";

/// Default glyph of [`SelectIcon`].
pub const DEFAULT_ICON: &str = "▾";

// =============================================================================
// Trigger
// =============================================================================

/// Combobox button showing the current value.
#[derive(Debug, Clone)]
pub struct SelectTrigger {
    select: Select,
}

impl SelectTrigger {
    pub fn mount(scope: &Scope) -> Result<Self> {
        let select = scope.require::<Select>("Select.Trigger", ROOT)?;
        Ok(Self { select })
    }

    pub fn id(&self) -> String {
        self.select.trigger_id()
    }

    pub fn press(&self) {
        self.select.toggle();
    }

    pub fn handle_key(&self, key: &KeyCombo) -> EventResult {
        if self.select.is_open() {
            return self.select.handle_key(key);
        }
        if is_trigger_key(key) {
            self.select.toggle();
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    pub fn attrs(&self) -> Attrs {
        let open = self.select.is_open();
        Attrs::new()
            .set("id", self.id())
            .set("type", "button")
            .set("role", "combobox")
            .set_bool("aria-expanded", open)
            .set("aria-haspopup", "listbox")
            .set_opt("aria-controls", open.then(|| self.select.listbox_id()))
            .set_opt("aria-activedescendant", self.select.highlighted())
    }
}

// =============================================================================
// Value and icon
// =============================================================================

/// Text of the trigger: the selected option's label or the placeholder.
#[derive(Debug, Clone)]
pub struct SelectValue {
    select: Select,
    placeholder: Option<String>,
}

impl SelectValue {
    pub fn mount(scope: &Scope) -> Result<Self> {
        let select = scope.require::<Select>("Select.Value", ROOT)?;
        Ok(Self {
            select,
            placeholder: None,
        })
    }

    /// Override the root's placeholder.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.select.selected_label().is_none()
    }

    pub fn text(&self) -> String {
        self.select.selected_label().unwrap_or_else(|| {
            self.placeholder
                .clone()
                .unwrap_or_else(|| self.select.placeholder())
        })
    }
}

/// Dropdown indicator.
#[derive(Debug, Clone)]
pub struct SelectIcon {
    glyph: String,
}

impl SelectIcon {
    pub fn mount(scope: &Scope) -> Result<Self> {
        scope.require::<Select>("Select.Icon", ROOT)?;
        Ok(Self {
            glyph: DEFAULT_ICON.to_string(),
        })
    }

    pub fn glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = glyph.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.glyph
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new().set_bool("aria-hidden", true)
    }
}

// =============================================================================
// Popup
// =============================================================================

/// Listbox holding the options. Stays mounted while closed, hidden.
#[derive(Debug, Clone)]
pub struct SelectPopup {
    select: Select,
}

impl SelectPopup {
    pub fn mount(scope: &Scope) -> Result<Self> {
        let select = scope.require::<Select>("Select.Popup", ROOT)?;
        Ok(Self { select })
    }

    pub fn is_visible(&self) -> bool {
        self.select.is_open()
    }

    pub fn backdrop_click(&self) {
        self.select.close();
    }

    pub fn handle_key(&self, key: &KeyCombo) -> EventResult {
        self.select.handle_key(key)
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new()
            .set("id", self.select.listbox_id())
            .set("role", "listbox")
            .set_bool("aria-hidden", !self.select.is_open())
    }
}

// =============================================================================
// Item
// =============================================================================

/// One option. Unregisters when dropped; its label stays known to the root.
#[derive(Debug)]
pub struct SelectItem {
    select: Select,
    id: String,
    value: String,
    label: String,
    _registration: Disposer,
}

impl SelectItem {
    /// Mount an option at position `index` among its siblings.
    pub fn mount(scope: &Scope, index: usize, option: &impl SelectOption) -> Result<Self> {
        let select = scope.require::<Select>("Select.Item", ROOT)?;
        let value = option.select_value();
        let label = option.select_label();
        let (id, registration) = select.register(index, value.clone(), label.clone());
        Ok(Self {
            select,
            id,
            value,
            label,
            _registration: registration,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_selected(&self) -> bool {
        self.select.value().as_deref() == Some(self.value.as_str())
    }

    pub fn is_highlighted(&self) -> bool {
        self.select.highlighted().as_deref() == Some(self.id.as_str())
    }

    pub fn hover(&self) {
        self.select.highlight(&self.id);
    }

    /// Select this option and close.
    pub fn click(&self) {
        self.select.choose(&self.id);
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new()
            .set("id", self.id.clone())
            .set("role", "option")
            .set_bool("aria-selected", self.is_selected())
            .set_flag("data-highlighted", self.is_highlighted())
    }
}
