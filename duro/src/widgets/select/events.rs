//! Event handling for the Select widget.

use duro_core::{EventResult, KeyCombo, PopupKey};

use super::Select;

impl Select {
    /// Handle a key while focus is inside the select.
    ///
    /// Closed selects ignore every key; the trigger handles opening.
    pub fn handle_key(&self, key: &KeyCombo) -> EventResult {
        let Some(popup_key) = PopupKey::from_key(key) else {
            return EventResult::Ignored;
        };

        let trigger_id = self.trigger_id();
        let (result, change) = {
            let Ok(mut guard) = self.inner.write() else {
                return EventResult::Ignored;
            };
            if !guard.disclosure.is_open() {
                return EventResult::Ignored;
            }
            guard.settle();

            let inner = &mut *guard;
            match popup_key {
                PopupKey::Navigate(action) => {
                    inner.highlight.apply(action, inner.registry.order());
                    (EventResult::Consumed, None)
                }
                PopupKey::Activate => {
                    let change = match inner.highlight.highlighted().map(str::to_string) {
                        Some(id) => inner.choose(&id, &trigger_id),
                        None => {
                            inner.close(&trigger_id);
                            None
                        }
                    };
                    (EventResult::Consumed, change)
                }
                PopupKey::Dismiss { passthrough } => {
                    inner.close(&trigger_id);
                    let result = if passthrough {
                        EventResult::Passthrough
                    } else {
                        EventResult::Consumed
                    };
                    (result, None)
                }
            }
        };

        self.mark_dirty();
        if let Some(change) = change {
            change.notify();
        }
        result
    }
}
