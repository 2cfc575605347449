//! Controlled/uncontrolled value reconciliation.
//!
//! A widget's current value either comes from its owner (controlled) or is
//! held by the widget itself (uncontrolled). Which one is authoritative is
//! decided solely by whether an external value is present.

use std::fmt;
use std::sync::Arc;

/// Change notification callback.
pub type ChangeCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Reconciles an externally supplied value with internally held state.
pub struct ControllableValue<T> {
    external: Option<T>,
    internal: T,
    on_change: Option<ChangeCallback<T>>,
}

impl<T: Clone> ControllableValue<T> {
    pub fn new(external: Option<T>, initial: T, on_change: Option<ChangeCallback<T>>) -> Self {
        Self {
            external,
            internal: initial,
            on_change,
        }
    }

    /// Uncontrolled value starting at `initial`.
    pub fn uncontrolled(initial: T) -> Self {
        Self::new(None, initial, None)
    }

    /// The authoritative value.
    pub fn current(&self) -> &T {
        self.external.as_ref().unwrap_or(&self.internal)
    }

    pub fn is_controlled(&self) -> bool {
        self.external.is_some()
    }

    /// Feed a new external value (or `None` to hand ownership back).
    pub fn set_external(&mut self, external: Option<T>) {
        self.external = external;
    }

    pub fn set_on_change(&mut self, on_change: Option<ChangeCallback<T>>) {
        self.on_change = on_change;
    }

    /// Update the value and notify.
    ///
    /// The callback runs synchronously, exactly once.
    pub fn set_value(&mut self, value: T) {
        self.stage(value).notify();
    }

    /// Apply a change without notifying yet.
    ///
    /// Callers holding a lock on widget state stage the change, release the
    /// lock, then call [`ValueChange::notify`].
    #[must_use = "the change notification only fires when notify() is called"]
    pub fn stage(&mut self, value: T) -> ValueChange<T> {
        if self.external.is_none() {
            self.internal = value.clone();
        }
        log::trace!(
            "[value] staged change controlled={}",
            self.external.is_some()
        );
        ValueChange {
            value,
            callback: self.on_change.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ControllableValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllableValue")
            .field("external", &self.external)
            .field("internal", &self.internal)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// A value change whose notification is still pending.
#[must_use = "the change notification only fires when notify() is called"]
pub struct ValueChange<T> {
    value: T,
    callback: Option<ChangeCallback<T>>,
}

impl<T> ValueChange<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Invoke the change callback, if any.
    pub fn notify(self) {
        if let Some(callback) = self.callback {
            callback(&self.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recorder<T: Clone + Send + 'static>() -> (Arc<Mutex<Vec<T>>>, ChangeCallback<T>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let callback: ChangeCallback<T> = Arc::new(move |v: &T| {
            sink.lock().unwrap().push(v.clone());
        });
        (seen, callback)
    }

    #[test]
    fn test_uncontrolled_updates_internal_and_notifies() {
        let (seen, callback) = recorder::<String>();
        let mut value = ControllableValue::new(None, "a".to_string(), Some(callback));

        value.set_value("b".to_string());

        assert_eq!(value.current(), "b");
        assert_eq!(*seen.lock().unwrap(), vec!["b".to_string()]);
    }

    #[test]
    fn test_controlled_never_diverges() {
        let (seen, callback) = recorder::<u32>();
        let mut value = ControllableValue::new(Some(7), 0, Some(callback));

        for n in 0..5 {
            value.set_value(n);
            assert_eq!(*value.current(), 7);
        }
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_feedback_loop_updates_controlled_value() {
        let mut value = ControllableValue::new(Some(1), 0, None);
        let change = value.stage(2);
        value.set_external(Some(*change.value()));
        change.notify();
        assert_eq!(*value.current(), 2);
    }

    #[test]
    fn test_releasing_control_reveals_internal_state() {
        let mut value = ControllableValue::new(Some(9), 3, None);
        value.set_value(4);
        value.set_external(None);
        // The internal copy was never touched while controlled.
        assert_eq!(*value.current(), 3);
    }
}
