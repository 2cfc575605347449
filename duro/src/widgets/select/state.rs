//! Select widget state.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use duro_core::{
    ChangeCallback, ControllableValue, Disclosure, Disposer, ItemRank, ListboxNavigation,
    OrderedItemRegistry, RovingHighlight, ValueChange,
};

use crate::config::SelectOptions;
use crate::id::WidgetId;
use crate::scope::Scope;

/// Registry payload for an option.
#[derive(Debug, Clone)]
pub(super) struct SelectEntry {
    pub value: String,
}

/// Internal state for a Select widget.
#[derive(Debug)]
pub(super) struct SelectInner {
    pub disclosure: Disclosure,
    pub registry: OrderedItemRegistry<SelectEntry>,
    pub highlight: RovingHighlight<ListboxNavigation>,
    pub value: ControllableValue<Option<String>>,
    /// Option labels by value, as captured from the items' text.
    pub labels: HashMap<String, String>,
    pub placeholder: String,
    pub name: Option<String>,
    pub focus_request: Option<String>,
    pub next_item: usize,
}

impl SelectInner {
    /// Item id of the option carrying the current value.
    fn selected_id(&self) -> Option<String> {
        let value = self.value.current().as_deref()?;
        self.registry
            .find(|record| record.payload.value == value)
            .map(|record| record.id.clone())
    }

    pub fn settle(&mut self) -> bool {
        if !self.disclosure.is_open() || !self.disclosure.take_pending_highlight() {
            return false;
        }
        let selected = self.selected_id();
        let highlighted = self
            .highlight
            .highlight_for_open(self.registry.order(), selected.as_deref());
        log::debug!("[select] settled highlight={:?}", highlighted);
        true
    }

    pub fn close(&mut self, trigger_id: &str) -> bool {
        if self.disclosure.close().is_none() {
            return false;
        }
        self.highlight.clear();
        self.focus_request = Some(trigger_id.to_string());
        true
    }

    pub fn toggle(&mut self, trigger_id: &str) {
        if self.disclosure.is_open() {
            self.close(trigger_id);
        } else {
            self.disclosure.open();
            self.highlight.clear();
        }
    }

    /// Select the option `id` and close. Unknown ids only close.
    pub fn choose(&mut self, id: &str, trigger_id: &str) -> Option<ValueChange<Option<String>>> {
        let value = self.registry.get(id).map(|record| record.payload.value.clone());
        self.close(trigger_id);
        let value = value?;
        log::debug!("[select] choose value={}", value);
        Some(self.value.stage(Some(value)))
    }
}

/// A dropdown select with controlled or uncontrolled value.
///
/// `Select` is a cheap-clone handle; clones share state.
///
/// # Example
///
/// ```ignore
/// let select = Select::new(SelectOptions::new().default_value("en").name("lang"));
/// let scope = select.provide(&Scope::new());
/// let trigger = SelectTrigger::mount(&scope)?;
/// let items = [("en", "English"), ("fr", "French"), ("es", "Spanish")]
///     .iter()
///     .enumerate()
///     .map(|(i, option)| SelectItem::mount(&scope, i, option))
///     .collect::<Result<Vec<_>>>()?;
/// ```
#[derive(Debug, Clone)]
pub struct Select {
    id: WidgetId,
    pub(super) inner: Arc<RwLock<SelectInner>>,
    dirty: Arc<AtomicBool>,
}

impl Select {
    pub fn new(options: SelectOptions) -> Self {
        let on_change = options.on_value_change.map(|callback| {
            let relay: ChangeCallback<Option<String>> = Arc::new(move |value: &Option<String>| {
                if let Some(value) = value {
                    callback(value);
                }
            });
            relay
        });
        let value = ControllableValue::new(
            options.value.map(Some),
            options.default_value,
            on_change,
        );
        Self {
            id: WidgetId::new("select"),
            inner: Arc::new(RwLock::new(SelectInner {
                disclosure: Disclosure::new(),
                registry: OrderedItemRegistry::new(),
                highlight: RovingHighlight::new(ListboxNavigation),
                value,
                labels: HashMap::new(),
                placeholder: options.placeholder,
                name: options.name,
                focus_request: None,
                next_item: 0,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Child scope in which select parts can mount.
    pub fn provide(&self, scope: &Scope) -> Scope {
        scope.provide(self.clone())
    }

    pub fn trigger_id(&self) -> String {
        self.id.part("trigger")
    }

    pub fn listbox_id(&self) -> String {
        self.id.part("listbox")
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    /// The selected value.
    pub fn value(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.value.current().clone())
            .unwrap_or(None)
    }

    /// Label of the selected value, if its option has been seen.
    pub fn selected_label(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| {
            guard
                .value
                .current()
                .as_ref()
                .and_then(|value| guard.labels.get(value).cloned())
        })
    }

    /// Feed the controlled `value` prop. `None` hands ownership back to the
    /// widget.
    pub fn set_value_prop(&self, value: Option<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.set_external(value.map(Some));
            self.mark_dirty();
        }
    }

    /// Select a value programmatically. Notifies like a user selection.
    pub fn select(&self, value: impl Into<String>) {
        let change = match self.inner.write() {
            Ok(mut guard) => guard.value.stage(Some(value.into())),
            Err(_) => return,
        };
        self.mark_dirty();
        change.notify();
    }

    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    /// Form field submitted with the select: `(name, value)`.
    ///
    /// `None` without a `name` option; an empty value when nothing is
    /// selected.
    pub fn form_field(&self) -> Option<(String, String)> {
        self.inner.read().ok().and_then(|guard| {
            let name = guard.name.clone()?;
            let value = guard.value.current().clone().unwrap_or_default();
            Some((name, value))
        })
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.disclosure.is_open())
            .unwrap_or(false)
    }

    pub fn toggle(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.toggle(&self.trigger_id());
            self.mark_dirty();
        }
    }

    pub fn open(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if !guard.disclosure.is_open() {
                guard.toggle(&self.trigger_id());
                self.mark_dirty();
            }
        }
    }

    pub fn close(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.close(&self.trigger_id()) {
                self.mark_dirty();
            }
        }
    }

    /// Run the post-registration phase of opening: highlight the selected
    /// option, or the first one.
    pub fn settle(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.settle() {
                self.mark_dirty();
            }
        }
    }

    // -------------------------------------------------------------------------
    // Highlight
    // -------------------------------------------------------------------------

    /// Item id of the highlighted option.
    pub fn highlighted(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.highlight.highlighted().map(str::to_string))
    }

    /// Value of the highlighted option.
    pub fn highlighted_value(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| {
            guard
                .highlight
                .activate(&guard.registry)
                .map(|record| record.payload.value.clone())
        })
    }

    pub fn highlight(&self, id: &str) {
        if let Ok(mut guard) = self.inner.write() {
            let inner = &mut *guard;
            if !inner.disclosure.is_open() {
                return;
            }
            if inner.highlight.set(id, inner.registry.order()) {
                self.mark_dirty();
            }
        }
    }

    pub fn take_focus_request(&self) -> Option<String> {
        self.inner
            .write()
            .ok()
            .and_then(|mut guard| guard.focus_request.take())
    }

    // -------------------------------------------------------------------------
    // Item registration
    // -------------------------------------------------------------------------

    pub(super) fn register(&self, index: usize, value: String, label: String) -> (String, Disposer) {
        let Ok(mut guard) = self.inner.write() else {
            return (self.id.item(usize::MAX), Disposer::noop());
        };
        let id = self.id.item(guard.next_item);
        guard.next_item += 1;
        log::debug!("[select] register {} value={}", id, value);
        if guard.labels.get(&value) != Some(&label) {
            guard.labels.insert(value.clone(), label);
        }
        let token = guard
            .registry
            .register(id.clone(), ItemRank::at(index), false, SelectEntry { value });
        drop(guard);
        self.mark_dirty();

        let weak = Arc::downgrade(&self.inner);
        let dirty = Arc::clone(&self.dirty);
        let item_id = id.clone();
        let disposer = Disposer::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let Ok(mut guard) = inner.write() else {
                return;
            };
            let state = &mut *guard;
            if state.registry.unregister_token(&item_id, token).is_some() {
                state.highlight.retain(state.registry.order());
                dirty.store(true, Ordering::SeqCst);
            }
        });
        (id, disposer)
    }

    /// Choose the option `id` (click) and close.
    pub(super) fn choose(&self, id: &str) {
        let change = match self.inner.write() {
            Ok(mut guard) => guard.choose(id, &self.trigger_id()),
            Err(_) => return,
        };
        self.mark_dirty();
        if let Some(change) = change {
            change.notify();
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

    pub(super) fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }
}

impl Default for Select {
    fn default() -> Self {
        Self::new(SelectOptions::default())
    }
}
