//! Keyboard handling for the Menu widget.

use duro_core::{EventResult, KeyCombo, PopupKey};

use super::state::{Activation, Menu};

impl Menu {
    /// Handle a key while focus is inside the menu.
    ///
    /// Closed menus ignore every key; the trigger handles opening.
    pub fn handle_key(&self, key: &KeyCombo) -> EventResult {
        let Some(popup_key) = PopupKey::from_key(key) else {
            return EventResult::Ignored;
        };

        let trigger_id = self.trigger_id();
        let (result, activation) = {
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
                    (EventResult::Consumed, Activation::None)
                }
                PopupKey::Activate => {
                    let activation = match inner.highlight.highlighted().map(str::to_string) {
                        Some(id) => inner.activate(&id, &trigger_id),
                        None => {
                            inner.close(&trigger_id);
                            Activation::None
                        }
                    };
                    (EventResult::Consumed, activation)
                }
                PopupKey::Dismiss { passthrough } => {
                    log::debug!("[menu] dismiss via {:?}", key.key);
                    inner.close(&trigger_id);
                    let result = if passthrough {
                        EventResult::Passthrough
                    } else {
                        EventResult::Consumed
                    };
                    (result, Activation::None)
                }
            }
        };

        self.mark_dirty();
        activation.run();
        result
    }
}
