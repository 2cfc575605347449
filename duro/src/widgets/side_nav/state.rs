//! SideNav root state.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use duro_core::{ChangeCallback, ControllableValue, Disposer, ItemRank, OrderedItemRegistry};

use crate::config::SideNavOptions;
use crate::id::WidgetId;
use crate::scope::Scope;

#[derive(Debug)]
pub(super) struct SideNavInner {
    pub value: ControllableValue<Option<String>>,
    pub expanded: HashSet<String>,
    /// Items keyed by value; the payload is the containing group's key.
    pub registry: OrderedItemRegistry<Option<String>>,
}

impl SideNavInner {
    fn group_of(&self, value: &str) -> Option<&str> {
        self.registry
            .get(value)
            .and_then(|record| record.payload.as_deref())
    }

    /// Expand the group containing the active item.
    /// Returns true if a group was expanded.
    pub fn reveal_active(&mut self) -> bool {
        let group = self
            .value
            .current()
            .as_deref()
            .and_then(|value| self.group_of(value))
            .map(str::to_string);
        match group {
            Some(group) if !self.expanded.contains(&group) => {
                log::debug!("[side_nav] auto-expand group={}", group);
                self.expanded.insert(group);
                true
            }
            _ => false,
        }
    }
}

/// Hierarchical navigation with collapsible groups.
///
/// `SideNav` is a cheap-clone handle; clones share state.
#[derive(Debug, Clone)]
pub struct SideNav {
    id: WidgetId,
    pub(super) inner: Arc<RwLock<SideNavInner>>,
    dirty: Arc<AtomicBool>,
}

impl SideNav {
    pub fn new(options: SideNavOptions) -> Self {
        let on_change = options.on_value_change.map(|callback| {
            let relay: ChangeCallback<Option<String>> = Arc::new(move |value: &Option<String>| {
                if let Some(value) = value {
                    callback(value);
                }
            });
            relay
        });
        Self {
            id: WidgetId::new("sidenav"),
            inner: Arc::new(RwLock::new(SideNavInner {
                value: ControllableValue::new(
                    options.value.map(Some),
                    options.default_value,
                    on_change,
                ),
                expanded: HashSet::new(),
                registry: OrderedItemRegistry::new(),
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Child scope in which groups and items can mount.
    pub fn provide(&self, scope: &Scope) -> Scope {
        scope.provide(self.clone())
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    pub fn value(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.value.current().clone())
            .unwrap_or(None)
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.value().as_deref() == Some(value)
    }

    /// Select an item by value.
    pub fn select(&self, value: impl Into<String>) {
        let change = match self.inner.write() {
            Ok(mut guard) => {
                let value = value.into();
                let changed = guard.value.current().as_deref() != Some(value.as_str());
                let change = guard.value.stage(Some(value));
                if changed {
                    guard.reveal_active();
                }
                change
            }
            Err(_) => return,
        };
        log::debug!("[side_nav] select {:?}", change.value());
        self.mark_dirty();
        change.notify();
    }

    /// Feed the controlled `value` prop. `None` hands ownership back.
    pub fn set_value_prop(&self, value: Option<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.set_external(value.map(Some));
            guard.reveal_active();
            self.mark_dirty();
        }
    }

    /// Item values in order.
    pub fn item_values(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.registry.ids())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Groups
    // -------------------------------------------------------------------------

    pub fn is_expanded(&self, group: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.expanded.contains(group))
            .unwrap_or(false)
    }

    pub fn toggle_group(&self, group: &str) {
        if let Ok(mut guard) = self.inner.write() {
            if !guard.expanded.remove(group) {
                guard.expanded.insert(group.to_string());
            }
            log::debug!(
                "[side_nav] toggle group={} expanded={}",
                group,
                guard.expanded.contains(group)
            );
            self.mark_dirty();
        }
    }

    pub(super) fn expand_group(&self, group: &str) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.expanded.insert(group.to_string()) {
                self.mark_dirty();
            }
        }
    }

    /// Whether the active item belongs to `group`.
    pub fn has_active_child(&self, group: &str) -> bool {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .value
                    .current()
                    .as_deref()
                    .and_then(|value| guard.group_of(value))
                    == Some(group)
            })
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Item registration
    // -------------------------------------------------------------------------

    pub(super) fn register(&self, rank: ItemRank, value: &str, group: Option<String>) -> Disposer {
        let Ok(mut guard) = self.inner.write() else {
            return Disposer::noop();
        };
        log::trace!("[side_nav] register {} group={:?}", value, group);
        let token = guard.registry.register(value, rank, false, group);
        guard.reveal_active();
        drop(guard);
        self.mark_dirty();

        let weak = Arc::downgrade(&self.inner);
        let dirty = Arc::clone(&self.dirty);
        let value = value.to_string();
        Disposer::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let Ok(mut guard) = inner.write() else {
                return;
            };
            if guard.registry.unregister_token(&value, token).is_some() {
                dirty.store(true, Ordering::SeqCst);
            }
        })
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }
}

impl Default for SideNav {
    fn default() -> Self {
        Self::new(SideNavOptions::default())
    }
}
