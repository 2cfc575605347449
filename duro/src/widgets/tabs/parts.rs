//! Tabs parts: list, tab and panel.

use duro_core::{Attrs, Disposer, EventResult, KeyCombo};

use super::Tabs;
use crate::error::Result;
use crate::scope::Scope;

const ROOT: &str = "Tabs.Root";

/// Container of the tabs; owns keyboard navigation.
#[derive(Debug, Clone)]
pub struct TabList {
    tabs: Tabs,
}

impl TabList {
    pub fn mount(scope: &Scope) -> Result<Self> {
        let tabs = scope.require::<Tabs>("Tabs.List", ROOT)?;
        Ok(Self { tabs })
    }

    pub fn handle_key(&self, key: &KeyCombo) -> EventResult {
        self.tabs.handle_key(key)
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new()
            .set("role", "tablist")
            .set("aria-orientation", self.tabs.orientation().as_str())
    }
}

/// A tab button. Unregisters when dropped.
#[derive(Debug)]
pub struct Tab {
    tabs: Tabs,
    value: String,
    disabled: bool,
    _registration: Disposer,
}

impl Tab {
    /// Mount the tab for `value` at position `index` in the list.
    pub fn mount(scope: &Scope, index: usize, value: impl Into<String>, disabled: bool) -> Result<Self> {
        let tabs = scope.require::<Tabs>("Tabs.Tab", ROOT)?;
        let value = value.into();
        let registration = tabs.register(index, &value, disabled);
        Ok(Self {
            tabs,
            value,
            disabled,
            _registration: registration,
        })
    }

    pub fn id(&self) -> String {
        self.tabs.tab_id(&self.value)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled != disabled {
            self.disabled = disabled;
            self.tabs.set_disabled(&self.value, disabled);
        }
    }

    pub fn is_active(&self) -> bool {
        self.tabs.is_active(&self.value)
    }

    /// Activate this tab. Disabled tabs ignore clicks.
    pub fn click(&self) {
        if self.disabled {
            log::trace!("[tabs] click on disabled tab {}", self.value);
            return;
        }
        self.tabs.select(self.value.clone());
    }

    pub fn attrs(&self) -> Attrs {
        let active = self.is_active();
        Attrs::new()
            .set("type", "button")
            .set("role", "tab")
            .set("id", self.id())
            .set_bool("aria-selected", active)
            .set("aria-controls", self.tabs.panel_id(&self.value))
            .set_flag("aria-disabled", self.disabled)
            .set("data-tab-value", self.value.clone())
            .set("tabindex", if active { "0" } else { "-1" })
    }
}

/// Content shown while its tab is active.
#[derive(Debug, Clone)]
pub struct TabPanel {
    tabs: Tabs,
    value: String,
}

impl TabPanel {
    pub fn mount(scope: &Scope, value: impl Into<String>) -> Result<Self> {
        let tabs = scope.require::<Tabs>("Tabs.Panel", ROOT)?;
        Ok(Self {
            tabs,
            value: value.into(),
        })
    }

    pub fn is_rendered(&self) -> bool {
        self.tabs.is_active(&self.value)
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new()
            .set("role", "tabpanel")
            .set("id", self.tabs.panel_id(&self.value))
            .set("aria-labelledby", self.tabs.tab_id(&self.value))
    }
}
