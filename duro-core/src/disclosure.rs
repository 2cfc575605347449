//! Open/close state machine for popup surfaces.
//!
//! Opening is a two-phase reaction. Phase one flips the state and arms a
//! pending initial highlight. Items then mount and register. Phase two, run
//! once the registrations have settled, consumes the flag through
//! [`Disclosure::take_pending_highlight`] and computes the highlight.

use crate::event::{Key, KeyCombo};
use crate::nav::NavAction;

/// Visibility of a popup surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenState {
    #[default]
    Closed,
    Open,
}

/// Effect the owning widget must apply after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Now open; an initial highlight is pending.
    Opened,
    /// Now closed; clear the highlight and return focus to the trigger.
    Closed,
}

#[derive(Debug, Default)]
pub struct Disclosure {
    state: OpenState,
    pending_highlight: bool,
}

impl Disclosure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OpenState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == OpenState::Open
    }

    pub fn toggle(&mut self) -> Transition {
        match self.state {
            OpenState::Closed => self.open_unchecked(),
            OpenState::Open => self.close_unchecked(),
        }
    }

    /// Open the surface. `None` if already open.
    pub fn open(&mut self) -> Option<Transition> {
        match self.state {
            OpenState::Closed => Some(self.open_unchecked()),
            OpenState::Open => None,
        }
    }

    /// Close the surface. `None` if already closed.
    pub fn close(&mut self) -> Option<Transition> {
        match self.state {
            OpenState::Open => Some(self.close_unchecked()),
            OpenState::Closed => None,
        }
    }

    /// Consume the pending initial-highlight flag.
    pub fn take_pending_highlight(&mut self) -> bool {
        std::mem::take(&mut self.pending_highlight)
    }

    pub fn has_pending_highlight(&self) -> bool {
        self.pending_highlight
    }

    fn open_unchecked(&mut self) -> Transition {
        log::debug!("[disclosure] open");
        self.state = OpenState::Open;
        self.pending_highlight = true;
        Transition::Opened
    }

    fn close_unchecked(&mut self) -> Transition {
        log::debug!("[disclosure] close");
        self.state = OpenState::Closed;
        self.pending_highlight = false;
        Transition::Closed
    }
}

/// What a key means to an open popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKey {
    Navigate(NavAction),
    /// Activate the highlighted item, then close.
    Activate,
    /// Close. `passthrough` keeps the host's default action (Tab traversal).
    Dismiss { passthrough: bool },
}

impl PopupKey {
    pub fn from_key(key: &KeyCombo) -> Option<PopupKey> {
        if key.modifiers.is_chord() {
            return None;
        }
        if let Some(action) = NavAction::from_key(key, None) {
            return Some(PopupKey::Navigate(action));
        }
        match key.key {
            Key::Enter | Key::Char(' ') => Some(PopupKey::Activate),
            Key::Escape => Some(PopupKey::Dismiss { passthrough: false }),
            Key::Tab | Key::BackTab => Some(PopupKey::Dismiss { passthrough: true }),
            _ => None,
        }
    }
}

/// Keys that activate a closed trigger (native button semantics).
pub fn is_trigger_key(key: &KeyCombo) -> bool {
    !key.modifiers.is_chord() && matches!(key.key, Key::Enter | Key::Char(' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycles_and_arms_highlight() {
        let mut disclosure = Disclosure::new();
        assert_eq!(disclosure.toggle(), Transition::Opened);
        assert!(disclosure.has_pending_highlight());
        assert!(disclosure.take_pending_highlight());
        assert!(!disclosure.take_pending_highlight());

        assert_eq!(disclosure.toggle(), Transition::Closed);
        assert_eq!(disclosure.state(), OpenState::Closed);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut disclosure = Disclosure::new();
        assert_eq!(disclosure.close(), None);

        disclosure.open();
        assert_eq!(disclosure.close(), Some(Transition::Closed));
        assert_eq!(disclosure.close(), None);
        assert!(!disclosure.is_open());
        assert!(!disclosure.has_pending_highlight());
    }

    #[test]
    fn test_close_disarms_pending_highlight() {
        let mut disclosure = Disclosure::new();
        disclosure.open();
        disclosure.close();
        assert!(!disclosure.take_pending_highlight());
    }

    #[test]
    fn test_popup_key_protocol() {
        assert_eq!(
            PopupKey::from_key(&KeyCombo::key(Key::Down)),
            Some(PopupKey::Navigate(NavAction::Next))
        );
        assert_eq!(
            PopupKey::from_key(&KeyCombo::key(Key::Left)),
            Some(PopupKey::Navigate(NavAction::Previous))
        );
        assert_eq!(PopupKey::from_key(&KeyCombo::key(Key::SPACE)), Some(PopupKey::Activate));
        assert_eq!(
            PopupKey::from_key(&KeyCombo::key(Key::Tab)),
            Some(PopupKey::Dismiss { passthrough: true })
        );
        assert_eq!(PopupKey::from_key(&KeyCombo::key(Key::Enter).ctrl()), None);
        assert_eq!(PopupKey::from_key(&KeyCombo::key(Key::Char('x'))), None);
    }
}
