//! Navigation policies for roving highlight and tab selection.
//!
//! A policy computes target positions within an ordered item sequence. Each
//! widget family plugs its own policy into the shared controllers.

use serde::{Deserialize, Serialize};

use crate::event::{Key, KeyCombo};
use crate::registry::OrderEntry;

/// Layout axis of a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Orientation::Vertical)
    }
}

/// A directional navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Previous,
    First,
    Last,
}

impl NavAction {
    /// Map a key for a list laid out along `orientation`.
    ///
    /// `None` orientation accepts both axes (popup lists).
    pub fn from_key(key: &KeyCombo, orientation: Option<Orientation>) -> Option<NavAction> {
        match (key.key, orientation) {
            (Key::Down, None | Some(Orientation::Vertical)) => Some(NavAction::Next),
            (Key::Right, None | Some(Orientation::Horizontal)) => Some(NavAction::Next),
            (Key::Up, None | Some(Orientation::Vertical)) => Some(NavAction::Previous),
            (Key::Left, None | Some(Orientation::Horizontal)) => Some(NavAction::Previous),
            (Key::Home, _) => Some(NavAction::First),
            (Key::End, _) => Some(NavAction::Last),
            _ => None,
        }
    }
}

/// Strategy for computing navigation targets.
///
/// Positions index into `order`. Returning `None` means "no target".
pub trait NavigationPolicy {
    fn next(&self, order: &[OrderEntry], current: Option<usize>) -> Option<usize>;

    fn previous(&self, order: &[OrderEntry], current: Option<usize>) -> Option<usize>;

    fn first(&self, order: &[OrderEntry]) -> Option<usize>;

    fn last(&self, order: &[OrderEntry]) -> Option<usize>;

    /// Item to highlight when a popup opens, given the selected position.
    fn open_highlight(&self, order: &[OrderEntry], selected: Option<usize>) -> Option<usize>;

    fn target(&self, action: NavAction, order: &[OrderEntry], current: Option<usize>) -> Option<usize> {
        match action {
            NavAction::Next => self.next(order, current),
            NavAction::Previous => self.previous(order, current),
            NavAction::First => self.first(order),
            NavAction::Last => self.last(order),
        }
    }
}

/// Menu items: circular, first item on open.
///
/// With nothing highlighted both directions land on the first item.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuNavigation;

impl NavigationPolicy for MenuNavigation {
    fn next(&self, order: &[OrderEntry], current: Option<usize>) -> Option<usize> {
        if order.is_empty() {
            return None;
        }
        Some(match current {
            Some(idx) => (idx + 1) % order.len(),
            None => 0,
        })
    }

    fn previous(&self, order: &[OrderEntry], current: Option<usize>) -> Option<usize> {
        if order.is_empty() {
            return None;
        }
        Some(match current {
            Some(idx) => (idx + order.len() - 1) % order.len(),
            None => 0,
        })
    }

    fn first(&self, order: &[OrderEntry]) -> Option<usize> {
        if order.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    fn last(&self, order: &[OrderEntry]) -> Option<usize> {
        order.len().checked_sub(1)
    }

    fn open_highlight(&self, order: &[OrderEntry], _selected: Option<usize>) -> Option<usize> {
        self.first(order)
    }
}

/// Listbox options: menu movement, but opening lands on the selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListboxNavigation;

impl NavigationPolicy for ListboxNavigation {
    fn next(&self, order: &[OrderEntry], current: Option<usize>) -> Option<usize> {
        MenuNavigation.next(order, current)
    }

    fn previous(&self, order: &[OrderEntry], current: Option<usize>) -> Option<usize> {
        MenuNavigation.previous(order, current)
    }

    fn first(&self, order: &[OrderEntry]) -> Option<usize> {
        MenuNavigation.first(order)
    }

    fn last(&self, order: &[OrderEntry]) -> Option<usize> {
        MenuNavigation.last(order)
    }

    fn open_highlight(&self, order: &[OrderEntry], selected: Option<usize>) -> Option<usize> {
        selected
            .filter(|idx| *idx < order.len())
            .or_else(|| self.first(order))
    }
}

/// Tabs: circular, disabled entries are skipped for every target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabNavigation;

impl TabNavigation {
    fn scan(order: &[OrderEntry], start: isize, step: isize) -> Option<usize> {
        let len = order.len() as isize;
        (1..=len)
            .map(|i| (start + step * i).rem_euclid(len) as usize)
            .find(|idx| !order[*idx].disabled)
    }

    /// Previous enabled tab when the active value has no registered tab.
    /// The scan starts one before the first tab, so the last tab comes last.
    pub fn previous_detached(&self, order: &[OrderEntry]) -> Option<usize> {
        if order.is_empty() {
            return None;
        }
        Self::scan(order, -1, -1)
    }
}

impl NavigationPolicy for TabNavigation {
    fn next(&self, order: &[OrderEntry], current: Option<usize>) -> Option<usize> {
        if order.is_empty() {
            return None;
        }
        let start = current.map(|idx| idx as isize).unwrap_or(-1);
        Self::scan(order, start, 1)
    }

    fn previous(&self, order: &[OrderEntry], current: Option<usize>) -> Option<usize> {
        if order.is_empty() {
            return None;
        }
        let start = current.map(|idx| idx as isize).unwrap_or(0);
        Self::scan(order, start, -1)
    }

    fn first(&self, order: &[OrderEntry]) -> Option<usize> {
        order.iter().position(|entry| !entry.disabled)
    }

    fn last(&self, order: &[OrderEntry]) -> Option<usize> {
        order.iter().rposition(|entry| !entry.disabled)
    }

    fn open_highlight(&self, order: &[OrderEntry], selected: Option<usize>) -> Option<usize> {
        selected
            .filter(|idx| order.get(*idx).is_some_and(|entry| !entry.disabled))
            .or_else(|| self.first(order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(entries: &[(&str, bool)]) -> Vec<OrderEntry> {
        entries
            .iter()
            .map(|(id, disabled)| OrderEntry {
                id: id.to_string(),
                disabled: *disabled,
            })
            .collect()
    }

    #[test]
    fn test_menu_wraps_both_ways() {
        let items = order(&[("a", false), ("b", false), ("c", false)]);
        assert_eq!(MenuNavigation.next(&items, Some(2)), Some(0));
        assert_eq!(MenuNavigation.previous(&items, Some(0)), Some(2));
    }

    #[test]
    fn test_menu_unhighlighted_starts_at_first() {
        let items = order(&[("a", false), ("b", false), ("c", false)]);
        assert_eq!(MenuNavigation.next(&items, None), Some(0));
        assert_eq!(MenuNavigation.previous(&items, None), Some(0));
    }

    #[test]
    fn test_empty_order_has_no_targets() {
        let items = order(&[]);
        for action in [NavAction::Next, NavAction::Previous, NavAction::First, NavAction::Last] {
            assert_eq!(MenuNavigation.target(action, &items, None), None);
            assert_eq!(TabNavigation.target(action, &items, None), None);
        }
    }

    #[test]
    fn test_listbox_opens_on_selection() {
        let items = order(&[("en", false), ("fr", false), ("es", false)]);
        assert_eq!(ListboxNavigation.open_highlight(&items, Some(2)), Some(2));
        assert_eq!(ListboxNavigation.open_highlight(&items, None), Some(0));
    }

    #[test]
    fn test_tabs_skip_disabled() {
        let items = order(&[("a", false), ("b", false), ("c", true)]);
        assert_eq!(TabNavigation.next(&items, Some(0)), Some(1));
        assert_eq!(TabNavigation.next(&items, Some(1)), Some(0));
        assert_eq!(TabNavigation.previous(&items, Some(0)), Some(1));
        assert_eq!(TabNavigation.last(&items), Some(1));

        let leading = order(&[("x", true), ("y", false)]);
        assert_eq!(TabNavigation.first(&leading), Some(1));
    }

    #[test]
    fn test_tabs_previous_detached_ends_on_last() {
        let items = order(&[("a", false), ("b", false), ("c", false)]);
        assert_eq!(TabNavigation.previous(&items, None), Some(2));
        assert_eq!(TabNavigation.previous_detached(&items), Some(1));

        let trailing = order(&[("a", true), ("b", true), ("c", false)]);
        assert_eq!(TabNavigation.previous_detached(&trailing), Some(2));
        assert_eq!(TabNavigation.previous_detached(&[]), None);
    }

    #[test]
    fn test_tabs_all_disabled() {
        let items = order(&[("a", true), ("b", true)]);
        assert_eq!(TabNavigation.next(&items, Some(0)), None);
        assert_eq!(TabNavigation.first(&items), None);
    }

    #[test]
    fn test_key_mapping_respects_orientation() {
        let right = KeyCombo::key(Key::Right);
        let down = KeyCombo::key(Key::Down);
        assert_eq!(NavAction::from_key(&right, Some(Orientation::Horizontal)), Some(NavAction::Next));
        assert_eq!(NavAction::from_key(&right, Some(Orientation::Vertical)), None);
        assert_eq!(NavAction::from_key(&down, Some(Orientation::Vertical)), Some(NavAction::Next));
        assert_eq!(NavAction::from_key(&down, None), Some(NavAction::Next));
        assert_eq!(
            NavAction::from_key(&KeyCombo::key(Key::Left), None),
            Some(NavAction::Previous)
        );
    }

    #[test]
    fn test_orientation_serde() {
        let parsed: Orientation = serde_json::from_str("\"vertical\"").unwrap();
        assert_eq!(parsed, Orientation::Vertical);
    }
}
