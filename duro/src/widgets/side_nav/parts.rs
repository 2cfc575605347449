//! SideNav parts: groups and items.

use duro_core::{Attrs, Disposer, ItemRank};

use super::SideNav;
use crate::config::GroupOptions;
use crate::error::Result;
use crate::scope::Scope;

const ROOT: &str = "SideNav.Root";

/// Scope entry identifying the enclosing group.
#[derive(Debug, Clone)]
struct GroupContext {
    key: String,
    rank: ItemRank,
}

impl SideNav {
    /// Attributes of the navigation root.
    pub fn attrs(&self) -> Attrs {
        Attrs::new().set("role", "navigation")
    }
}

// =============================================================================
// Group
// =============================================================================

/// A collapsible group of items.
#[derive(Debug, Clone)]
pub struct SideNavGroup {
    nav: SideNav,
    label: String,
    key: String,
    rank: ItemRank,
}

impl SideNavGroup {
    /// Mount a group at position `index` among the root's children.
    pub fn mount(scope: &Scope, index: usize, options: GroupOptions) -> Result<Self> {
        let nav = scope.require::<SideNav>("SideNav.Group", ROOT)?;
        let key = options.key().to_string();
        if options.default_expanded {
            nav.expand_group(&key);
        }
        Ok(Self {
            nav,
            label: options.label,
            key,
            rank: ItemRank::at(index),
        })
    }

    /// Child scope in which this group's items mount.
    pub fn provide(&self, scope: &Scope) -> Scope {
        scope.provide(GroupContext {
            key: self.key.clone(),
            rank: self.rank.clone(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_expanded(&self) -> bool {
        self.nav.is_expanded(&self.key)
    }

    /// Click on the group's trigger.
    pub fn toggle(&self) {
        self.nav.toggle_group(&self.key);
    }

    pub fn has_active_child(&self) -> bool {
        self.nav.has_active_child(&self.key)
    }

    /// Attributes of the group's toggle button.
    pub fn attrs(&self) -> Attrs {
        Attrs::new()
            .set("type", "button")
            .set_bool("aria-expanded", self.is_expanded())
            .set_flag("data-active-child", self.has_active_child())
    }
}

// =============================================================================
// Item
// =============================================================================

/// A navigation item. Unregisters when dropped.
#[derive(Debug)]
pub struct SideNavItem {
    nav: SideNav,
    value: String,
    group: Option<String>,
    _registration: Disposer,
}

impl SideNavItem {
    /// Mount an item at position `index` among its siblings (within its group
    /// when mounted in a group's scope).
    pub fn mount(scope: &Scope, index: usize, value: impl Into<String>) -> Result<Self> {
        let nav = scope.require::<SideNav>("SideNav.Item", ROOT)?;
        let value = value.into();
        let (rank, group) = match scope.get::<GroupContext>() {
            Some(group) => (group.rank.child(index), Some(group.key)),
            None => (ItemRank::at(index), None),
        };
        let registration = nav.register(rank, &value, group.clone());
        Ok(Self {
            nav,
            value,
            group,
            _registration: registration,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.nav.is_active(&self.value)
    }

    /// Whether the item is shown: top-level, or inside an expanded group.
    pub fn is_visible(&self) -> bool {
        match &self.group {
            Some(group) => self.nav.is_expanded(group),
            None => true,
        }
    }

    pub fn click(&self) {
        self.nav.select(self.value.clone());
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new()
            .set("type", "button")
            .set("data-nav-value", self.value.clone())
            .set_opt("aria-current", self.is_active().then_some("page"))
    }
}
