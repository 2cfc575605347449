//! Widget instance identifiers.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Unique identifier for a widget instance.
///
/// Rendered as `duro-<kind>-<n>`; part and item ids are derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId {
    kind: &'static str,
    n: usize,
}

impl WidgetId {
    pub(crate) fn new(kind: &'static str) -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self {
            kind,
            n: COUNTER.fetch_add(1, Ordering::SeqCst),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Id of a named part, e.g. `duro-menu-3-trigger`.
    pub fn part(&self, name: &str) -> String {
        format!("{}-{}", self, name)
    }

    /// Id of the `index`-th item, e.g. `duro-menu-3-item-0`.
    pub fn item(&self, index: usize) -> String {
        format!("{}-item-{}", self, index)
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "duro-{}-{}", self.kind, self.n)
    }
}
