//! Composition scope: the channel a root uses to hand its state to parts.
//!
//! A root provides its handle into a child scope; parts mounted in that scope
//! (or any scope derived from it) look the handle up by type. There is no
//! ambient or global state: a scope is an ordinary value passed down through
//! composition, and a part given the wrong scope fails with a usage error.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

type Entry = Arc<dyn Any + Send + Sync>;

/// Immutable map of provided contexts, keyed by type.
#[derive(Clone, Default)]
pub struct Scope {
    contexts: Arc<HashMap<TypeId, Entry>>,
}

impl Scope {
    /// An empty root scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a child scope that additionally provides `value`.
    ///
    /// A value of the same type provided further up is shadowed.
    pub fn provide<T: Any + Send + Sync>(&self, value: T) -> Scope {
        let mut contexts = (*self.contexts).clone();
        contexts.insert(TypeId::of::<T>(), Arc::new(value));
        Scope {
            contexts: Arc::new(contexts),
        }
    }

    /// Look up a provided value.
    pub fn get<T: Any + Send + Sync + Clone>(&self) -> Option<T> {
        self.contexts
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<T>())
            .cloned()
    }

    /// Look up a provided value or fail with a usage error.
    pub fn require<T: Any + Send + Sync + Clone>(
        &self,
        part: &'static str,
        root: &'static str,
    ) -> Result<T> {
        self.get::<T>().ok_or_else(|| {
            log::error!("[scope] {} mounted outside {}", part, root);
            Error::Usage { part, root }
        })
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.contexts.contains_key(&TypeId::of::<T>())
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("contexts", &self.contexts.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Marker(u32);

    #[test]
    fn test_child_scope_sees_parent_values() {
        let root = Scope::new().provide(Marker(1));
        let child = root.provide(String::from("inner"));

        assert_eq!(child.get::<Marker>(), Some(Marker(1)));
        assert_eq!(child.get::<String>().as_deref(), Some("inner"));
        assert_eq!(root.get::<String>(), None);
    }

    #[test]
    fn test_nearest_provider_wins() {
        let outer = Scope::new().provide(Marker(1));
        let inner = outer.provide(Marker(2));
        assert_eq!(inner.get::<Marker>(), Some(Marker(2)));
        assert_eq!(outer.get::<Marker>(), Some(Marker(1)));
    }

    #[test]
    fn test_require_reports_usage_error() {
        let err = Scope::new()
            .require::<Marker>("Menu.Item", "Menu.Root")
            .unwrap_err();
        assert_eq!(err.to_string(), "Menu.Item must be used within Menu.Root");
    }
}
