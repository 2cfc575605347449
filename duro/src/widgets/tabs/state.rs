//! Tabs root state and keyboard handling.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use duro_core::{
    ChangeCallback, ControllableValue, Disposer, EventResult, ItemRank, KeyCombo, NavAction,
    NavigationPolicy, OrderedItemRegistry, Orientation, TabNavigation, ValueChange,
};

use crate::config::TabsOptions;
use crate::id::WidgetId;
use crate::scope::Scope;

#[derive(Debug)]
pub(super) struct TabsInner {
    pub value: ControllableValue<Option<String>>,
    /// Tabs keyed by value.
    pub registry: OrderedItemRegistry<()>,
    pub orientation: Orientation,
    pub focus_request: Option<String>,
}

impl TabsInner {
    fn active_position(&self) -> Option<usize> {
        let value = self.value.current().as_deref()?;
        self.registry.position(value)
    }

    /// Target tab value for a navigation action, skipping disabled tabs.
    fn target(&self, action: NavAction) -> Option<String> {
        let order = self.registry.order();
        let current = self.active_position();
        let detached = current.is_none() && self.value.current().is_some();
        let idx = match action {
            NavAction::Previous if detached => TabNavigation.previous_detached(order),
            _ => TabNavigation.target(action, order, current),
        };
        idx.map(|idx| order[idx].id.clone())
    }
}

/// A set of tabs and their panels.
///
/// `Tabs` is a cheap-clone handle; clones share state.
#[derive(Debug, Clone)]
pub struct Tabs {
    id: WidgetId,
    pub(super) inner: Arc<RwLock<TabsInner>>,
    dirty: Arc<AtomicBool>,
}

impl Tabs {
    pub fn new(options: TabsOptions) -> Self {
        let on_change = options.on_value_change.map(|callback| {
            let relay: ChangeCallback<Option<String>> = Arc::new(move |value: &Option<String>| {
                if let Some(value) = value {
                    callback(value);
                }
            });
            relay
        });
        Self {
            id: WidgetId::new("tabs"),
            inner: Arc::new(RwLock::new(TabsInner {
                value: ControllableValue::new(
                    options.value.map(Some),
                    options.default_value,
                    on_change,
                ),
                registry: OrderedItemRegistry::new(),
                orientation: options.orientation,
                focus_request: None,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Child scope in which tab parts can mount.
    pub fn provide(&self, scope: &Scope) -> Scope {
        scope.provide(self.clone())
    }

    /// Id of the tab for `value`.
    pub fn tab_id(&self, value: &str) -> String {
        format!("{}-tab-{}", self.id, value)
    }

    /// Id of the panel for `value`.
    pub fn panel_id(&self, value: &str) -> String {
        format!("{}-panel", self.tab_id(value))
    }

    pub fn orientation(&self) -> Orientation {
        self.inner
            .read()
            .map(|guard| guard.orientation)
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    /// Value of the active tab.
    pub fn value(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.value.current().clone())
            .unwrap_or(None)
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.value().as_deref() == Some(value)
    }

    /// Feed the controlled `value` prop. `None` hands ownership back.
    pub fn set_value_prop(&self, value: Option<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.set_external(value.map(Some));
            self.mark_dirty();
        }
    }

    /// Activate a tab by value.
    pub fn select(&self, value: impl Into<String>) {
        let change = match self.inner.write() {
            Ok(mut guard) => guard.value.stage(Some(value.into())),
            Err(_) => return,
        };
        log::debug!("[tabs] select {:?}", change.value());
        self.mark_dirty();
        change.notify();
    }

    /// Tab values in order.
    pub fn tab_values(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.registry.ids())
            .unwrap_or_default()
    }

    pub fn is_disabled(&self, value: &str) -> bool {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.registry.get(value).map(|record| record.disabled))
            .unwrap_or(false)
    }

    /// Tab element the host should focus after keyboard activation.
    pub fn take_focus_request(&self) -> Option<String> {
        self.inner
            .write()
            .ok()
            .and_then(|mut guard| guard.focus_request.take())
    }

    // -------------------------------------------------------------------------
    // Keyboard
    // -------------------------------------------------------------------------

    /// Handle a key on the tab list.
    ///
    /// Arrow keys follow the orientation; Home/End jump to the first/last
    /// enabled tab. Disabled tabs are never targeted.
    pub fn handle_key(&self, key: &KeyCombo) -> EventResult {
        if key.modifiers.is_chord() {
            return EventResult::Ignored;
        }

        let change: Option<ValueChange<Option<String>>> = {
            let Ok(mut guard) = self.inner.write() else {
                return EventResult::Ignored;
            };
            let Some(action) = NavAction::from_key(key, Some(guard.orientation)) else {
                return EventResult::Ignored;
            };
            if guard.registry.is_empty() {
                return EventResult::Ignored;
            }

            match guard.target(action) {
                Some(target) => {
                    log::debug!("[tabs] {:?} -> {}", action, target);
                    guard.focus_request = Some(self.tab_id(&target));
                    Some(guard.value.stage(Some(target)))
                }
                None => None,
            }
        };

        self.mark_dirty();
        if let Some(change) = change {
            change.notify();
        }
        EventResult::Consumed
    }

    // -------------------------------------------------------------------------
    // Tab registration
    // -------------------------------------------------------------------------

    pub(super) fn register(&self, index: usize, value: &str, disabled: bool) -> Disposer {
        let Ok(mut guard) = self.inner.write() else {
            return Disposer::noop();
        };
        log::debug!("[tabs] register {} disabled={}", value, disabled);
        let token = guard
            .registry
            .register(value, ItemRank::at(index), disabled, ());
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

    pub(super) fn set_disabled(&self, value: &str, disabled: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.registry.set_disabled(value, disabled);
            self.mark_dirty();
        }
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

impl Default for Tabs {
    fn default() -> Self {
        Self::new(TabsOptions::default())
    }
}
