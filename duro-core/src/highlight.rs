use crate::nav::{NavAction, NavigationPolicy};
use crate::registry::{ItemRecord, OrderEntry, OrderedItemRegistry};

/// Tracks which item is logically highlighted among peers.
///
/// The highlight is distinct from input focus. It always references an id
/// present in the order it was last reconciled against; when that id leaves
/// the order the highlight is cleared.
#[derive(Debug, Default)]
pub struct RovingHighlight<N> {
    highlighted: Option<String>,
    policy: N,
}

impl<N: NavigationPolicy> RovingHighlight<N> {
    pub fn new(policy: N) -> Self {
        Self {
            highlighted: None,
            policy,
        }
    }

    /// Currently highlighted id.
    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlighted.as_deref() == Some(id)
    }

    pub fn policy(&self) -> &N {
        &self.policy
    }

    /// Highlight a specific item (pointer hover).
    /// Returns true if the highlight changed.
    pub fn set(&mut self, id: &str, order: &[OrderEntry]) -> bool {
        if !order.iter().any(|entry| entry.id == id) {
            log::trace!("[highlight] ignoring unknown id={}", id);
            return false;
        }
        self.replace(Some(id.to_string()))
    }

    /// Clear the highlight.
    /// Returns true if something was highlighted.
    pub fn clear(&mut self) -> bool {
        self.replace(None)
    }

    pub fn move_next(&mut self, order: &[OrderEntry]) -> Option<&str> {
        self.apply(NavAction::Next, order)
    }

    pub fn move_previous(&mut self, order: &[OrderEntry]) -> Option<&str> {
        self.apply(NavAction::Previous, order)
    }

    pub fn move_first(&mut self, order: &[OrderEntry]) -> Option<&str> {
        self.apply(NavAction::First, order)
    }

    pub fn move_last(&mut self, order: &[OrderEntry]) -> Option<&str> {
        self.apply(NavAction::Last, order)
    }

    /// Move according to `action`. Empty orders leave the state untouched.
    /// Returns the highlighted id after the move.
    pub fn apply(&mut self, action: NavAction, order: &[OrderEntry]) -> Option<&str> {
        let current = self.position(order);
        if let Some(target) = self.policy.target(action, order, current) {
            let id = order[target].id.clone();
            log::debug!("[highlight] {:?} -> {}", action, id);
            self.replace(Some(id));
        }
        self.highlighted()
    }

    /// Initial highlight for a freshly opened popup.
    pub fn highlight_for_open(&mut self, order: &[OrderEntry], selected: Option<&str>) -> Option<&str> {
        let selected = selected.and_then(|id| order.iter().position(|entry| entry.id == id));
        let target = self.policy.open_highlight(order, selected);
        self.replace(target.map(|idx| order[idx].id.clone()));
        self.highlighted()
    }

    /// Drop the highlight if its id is no longer part of `order`.
    /// Returns true if the highlight was cleared.
    pub fn retain(&mut self, order: &[OrderEntry]) -> bool {
        match self.position(order) {
            Some(_) => false,
            None if self.highlighted.is_some() => {
                log::debug!("[highlight] highlighted item removed, clearing");
                self.highlighted = None;
                true
            }
            None => false,
        }
    }

    /// Record of the highlighted item, for activation.
    pub fn activate<'r, P>(&self, registry: &'r OrderedItemRegistry<P>) -> Option<&'r ItemRecord<P>> {
        self.highlighted
            .as_deref()
            .and_then(|id| registry.get(id))
    }

    fn position(&self, order: &[OrderEntry]) -> Option<usize> {
        let id = self.highlighted.as_deref()?;
        order.iter().position(|entry| entry.id == id)
    }

    fn replace(&mut self, next: Option<String>) -> bool {
        if self.highlighted == next {
            return false;
        }
        self.highlighted = next;
        true
    }
}
