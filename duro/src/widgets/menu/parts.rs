//! Menu parts: trigger, popup and items.

use std::sync::Arc;

use duro_core::{is_trigger_key, Attrs, Disposer, EventResult, KeyCombo};

use super::state::{EntryKind, Menu, MenuEntry};
use crate::config::MenuAlign;
use crate::error::Result;
use crate::scope::Scope;

const ROOT: &str = "Menu.Root";

// =============================================================================
// Trigger
// =============================================================================

/// Button that toggles the menu.
#[derive(Debug, Clone)]
pub struct MenuTrigger {
    menu: Menu,
}

impl MenuTrigger {
    pub fn mount(scope: &Scope) -> Result<Self> {
        let menu = scope.require::<Menu>("Menu.Trigger", ROOT)?;
        Ok(Self { menu })
    }

    pub fn id(&self) -> String {
        self.menu.trigger_id()
    }

    /// Pointer press.
    pub fn press(&self) {
        self.menu.toggle();
    }

    /// Keys reaching the focused trigger.
    ///
    /// While the menu is open the root's handler applies; otherwise
    /// Enter/Space act like a press.
    pub fn handle_key(&self, key: &KeyCombo) -> EventResult {
        if self.menu.is_open() {
            return self.menu.handle_key(key);
        }
        if is_trigger_key(key) {
            self.menu.toggle();
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    pub fn attrs(&self) -> Attrs {
        let open = self.menu.is_open();
        Attrs::new()
            .set("id", self.id())
            .set("type", "button")
            .set_bool("aria-expanded", open)
            .set("aria-haspopup", "menu")
            .set_opt("aria-controls", open.then(|| self.menu.popup_id()))
    }
}

// =============================================================================
// Popup
// =============================================================================

/// Surface listing the items. Rendered only while open.
#[derive(Debug, Clone)]
pub struct MenuPopup {
    menu: Menu,
    align: MenuAlign,
}

impl MenuPopup {
    pub fn mount(scope: &Scope, align: MenuAlign) -> Result<Self> {
        let menu = scope.require::<Menu>("Menu.Popup", ROOT)?;
        Ok(Self { menu, align })
    }

    pub fn align(&self) -> MenuAlign {
        self.align
    }

    pub fn is_rendered(&self) -> bool {
        self.menu.is_open()
    }

    /// Click on the backdrop behind the popup.
    pub fn backdrop_click(&self) {
        log::debug!("[menu] backdrop click");
        self.menu.close();
    }

    pub fn handle_key(&self, key: &KeyCombo) -> EventResult {
        self.menu.handle_key(key)
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new()
            .set("id", self.menu.popup_id())
            .set("role", "menu")
            .set_opt("aria-activedescendant", self.menu.highlighted())
            .set("data-align", self.align.as_str())
    }
}

// =============================================================================
// Items
// =============================================================================

/// An action item. Unregisters when dropped.
#[derive(Debug)]
pub struct MenuItem {
    menu: Menu,
    id: String,
    label: String,
    _registration: Disposer,
}

impl MenuItem {
    /// Mount an item at position `index` among its siblings.
    pub fn mount(scope: &Scope, index: usize, label: impl Into<String>) -> Result<Self> {
        let menu = scope.require::<Menu>("Menu.Item", ROOT)?;
        let label = label.into();
        let (id, registration) = menu.register(
            index,
            MenuEntry {
                label: label.clone(),
                kind: EntryKind::Action(None),
            },
        );
        Ok(Self {
            menu,
            id,
            label,
            _registration: registration,
        })
    }

    /// Set the action run when the item is activated.
    pub fn on_click(self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.menu.set_action(&self.id, Arc::new(action));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_highlighted(&self) -> bool {
        self.menu.highlighted().as_deref() == Some(self.id.as_str())
    }

    /// Pointer entered the item.
    pub fn hover(&self) {
        self.menu.highlight(&self.id);
    }

    /// Run the action and close the menu.
    pub fn click(&self) {
        self.menu.activate_item(&self.id);
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new()
            .set("id", self.id.clone())
            .set("role", "menuitem")
            .set_flag("data-highlighted", self.is_highlighted())
    }
}

/// A navigation item. Activation records the href for the host and closes.
#[derive(Debug)]
pub struct MenuLinkItem {
    menu: Menu,
    id: String,
    href: String,
    _registration: Disposer,
}

impl MenuLinkItem {
    pub fn mount(
        scope: &Scope,
        index: usize,
        label: impl Into<String>,
        href: impl Into<String>,
    ) -> Result<Self> {
        let menu = scope.require::<Menu>("Menu.LinkItem", ROOT)?;
        let href = href.into();
        let (id, registration) = menu.register(
            index,
            MenuEntry {
                label: label.into(),
                kind: EntryKind::Link(href.clone()),
            },
        );
        Ok(Self {
            menu,
            id,
            href,
            _registration: registration,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn is_highlighted(&self) -> bool {
        self.menu.highlighted().as_deref() == Some(self.id.as_str())
    }

    pub fn hover(&self) {
        self.menu.highlight(&self.id);
    }

    pub fn click(&self) {
        self.menu.activate_item(&self.id);
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new()
            .set("id", self.id.clone())
            .set("role", "menuitem")
            .set("href", self.href.clone())
            .set_flag("data-highlighted", self.is_highlighted())
    }
}
