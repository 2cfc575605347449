//! Menu root state.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use duro_core::{
    Disclosure, Disposer, ItemRank, MenuNavigation, OrderedItemRegistry, RovingHighlight,
    Transition,
};

use crate::id::WidgetId;
use crate::scope::Scope;

/// Callback run when a menu item is activated.
pub type MenuAction = Arc<dyn Fn() + Send + Sync>;

/// What activating an item does.
#[derive(Clone)]
pub(super) enum EntryKind {
    Action(Option<MenuAction>),
    Link(String),
}

/// Registry payload for a menu item.
#[derive(Clone)]
pub(super) struct MenuEntry {
    pub label: String,
    pub kind: EntryKind,
}

impl fmt::Debug for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            EntryKind::Action(action) => format!("action(set={})", action.is_some()),
            EntryKind::Link(href) => format!("link({})", href),
        };
        f.debug_struct("MenuEntry")
            .field("label", &self.label)
            .field("kind", &kind)
            .finish()
    }
}

/// Deferred effect of an activation, run after the lock is released.
pub(super) enum Activation {
    None,
    Run(MenuAction),
}

impl Activation {
    pub(super) fn run(self) {
        if let Activation::Run(action) = self {
            action();
        }
    }
}

#[derive(Debug, Default)]
pub(super) struct MenuInner {
    pub disclosure: Disclosure,
    pub registry: OrderedItemRegistry<MenuEntry>,
    pub highlight: RovingHighlight<MenuNavigation>,
    /// Element that should receive focus next (the trigger after a close).
    pub focus_request: Option<String>,
    /// Href of the last activated link item.
    pub navigation: Option<String>,
    /// Counter for item ids.
    pub next_item: usize,
}

impl MenuInner {
    /// Close and apply the close effects. False if already closed.
    pub fn close(&mut self, trigger_id: &str) -> bool {
        match self.disclosure.close() {
            Some(transition) => {
                self.after(transition, trigger_id);
                true
            }
            None => false,
        }
    }

    pub fn toggle(&mut self, trigger_id: &str) {
        let transition = self.disclosure.toggle();
        self.after(transition, trigger_id);
    }

    /// Second phase of opening: compute the initial highlight.
    pub fn settle(&mut self) -> bool {
        if !self.disclosure.is_open() || !self.disclosure.take_pending_highlight() {
            return false;
        }
        let highlighted = self.highlight.highlight_for_open(self.registry.order(), None);
        log::debug!("[menu] settled highlight={:?}", highlighted);
        true
    }

    /// Resolve what activating `id` does and close the menu.
    pub fn activate(&mut self, id: &str, trigger_id: &str) -> Activation {
        let entry = self.registry.get(id).map(|record| record.payload.kind.clone());
        self.close(trigger_id);
        match entry {
            Some(EntryKind::Action(Some(action))) => Activation::Run(action),
            Some(EntryKind::Action(None)) | None => Activation::None,
            Some(EntryKind::Link(href)) => {
                log::debug!("[menu] navigate href={}", href);
                self.navigation = Some(href);
                Activation::None
            }
        }
    }

    fn after(&mut self, transition: Transition, trigger_id: &str) {
        match transition {
            Transition::Opened => {
                self.highlight.clear();
            }
            Transition::Closed => {
                self.highlight.clear();
                self.focus_request = Some(trigger_id.to_string());
            }
        }
    }
}

/// A dropdown menu of actions and links.
///
/// `Menu` is a cheap-clone handle; clones share state. The root provides
/// itself to its parts through [`Menu::provide`].
///
/// # Example
///
/// ```ignore
/// let menu = Menu::new();
/// let scope = menu.provide(&Scope::new());
/// let trigger = MenuTrigger::mount(&scope)?;
/// let popup = MenuPopup::mount(&scope, MenuAlign::Start)?;
/// let settings = MenuItem::mount(&scope, 0, "Settings")?.on_click(|| open_settings());
///
/// trigger.press();
/// menu.settle();
/// assert_eq!(menu.highlighted(), Some(settings.id().to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct Menu {
    id: WidgetId,
    pub(super) inner: Arc<RwLock<MenuInner>>,
    dirty: Arc<AtomicBool>,
}

impl Menu {
    pub fn new() -> Self {
        Self {
            id: WidgetId::new("menu"),
            inner: Arc::new(RwLock::new(MenuInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Child scope in which menu parts can mount.
    pub fn provide(&self, scope: &Scope) -> Scope {
        scope.provide(self.clone())
    }

    pub fn trigger_id(&self) -> String {
        self.id.part("trigger")
    }

    pub fn popup_id(&self) -> String {
        self.id.part("popup")
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
            let trigger_id = self.trigger_id();
            guard.toggle(&trigger_id);
            self.mark_dirty();
        }
    }

    pub fn open(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.disclosure.open().is_some() {
                guard.highlight.clear();
                self.mark_dirty();
            }
        }
    }

    /// Close the menu. No-op if already closed.
    pub fn close(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.close(&self.trigger_id()) {
                self.mark_dirty();
            }
        }
    }

    /// Run the post-registration phase of opening.
    ///
    /// Call once the items of a freshly opened menu have mounted.
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

    /// Id of the highlighted item.
    pub fn highlighted(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.highlight.highlighted().map(str::to_string))
    }

    /// Label of the highlighted item.
    pub fn highlighted_label(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| {
            guard
                .highlight
                .activate(&guard.registry)
                .map(|record| record.payload.label.clone())
        })
    }

    /// Highlight an item (pointer hover). Ignored while closed or for unknown ids.
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

    /// Registered item ids in order.
    pub fn item_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.registry.ids())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Requests for the host
    // -------------------------------------------------------------------------

    /// Element the host should focus, if the menu asked for it.
    pub fn take_focus_request(&self) -> Option<String> {
        self.inner
            .write()
            .ok()
            .and_then(|mut guard| guard.focus_request.take())
    }

    /// Href of an activated link item, if one is pending.
    pub fn take_navigation(&self) -> Option<String> {
        self.inner
            .write()
            .ok()
            .and_then(|mut guard| guard.navigation.take())
    }

    // -------------------------------------------------------------------------
    // Item registration
    // -------------------------------------------------------------------------

    /// Register an item. The returned disposer unregisters it.
    pub(super) fn register(&self, index: usize, entry: MenuEntry) -> (String, Disposer) {
        let Ok(mut guard) = self.inner.write() else {
            return (self.id.item(usize::MAX), Disposer::noop());
        };
        let id = self.id.item(guard.next_item);
        guard.next_item += 1;
        log::debug!("[menu] register {} label={:?}", id, entry.label);
        let token = guard.registry.register(id.clone(), ItemRank::at(index), false, entry);
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
                log::debug!("[menu] unregister {}", item_id);
                state.highlight.retain(state.registry.order());
                dirty.store(true, Ordering::SeqCst);
            }
        });
        (id, disposer)
    }

    pub(super) fn set_action(&self, id: &str, action: MenuAction) {
        if let Ok(mut guard) = self.inner.write() {
            if let Some(record) = guard.registry.get_mut(id) {
                record.payload.kind = EntryKind::Action(Some(action));
            }
        }
    }

    /// Activate an item (click) and close.
    pub(super) fn activate_item(&self, id: &str) {
        let activation = match self.inner.write() {
            Ok(mut guard) => guard.activate(id, &self.trigger_id()),
            Err(_) => return,
        };
        self.mark_dirty();
        activation.run();
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

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}
