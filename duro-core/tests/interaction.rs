use std::sync::{Arc, Mutex};

use duro_core::{
    ChangeCallback, ControllableValue, Disclosure, ItemRank, Key, KeyCombo, ListboxNavigation,
    MenuNavigation, OrderedItemRegistry, PopupKey, RovingHighlight, TabNavigation, Transition,
};

fn ids<P>(registry: &OrderedItemRegistry<P>) -> Vec<String> {
    registry.ids()
}

// ============================================================================
// Registry ordering
// ============================================================================

#[test]
fn test_order_is_independent_of_registration_order() {
    let mut forward = OrderedItemRegistry::new();
    let mut reverse = OrderedItemRegistry::new();
    let items = [("a", 0), ("b", 1), ("c", 2), ("d", 3)];

    for (id, index) in items {
        forward.register(id, ItemRank::at(index), false, ());
    }
    for (id, index) in items.iter().rev() {
        reverse.register(*id, ItemRank::at(*index), false, ());
    }

    assert_eq!(ids(&forward), vec!["a", "b", "c", "d"]);
    assert_eq!(ids(&forward), ids(&reverse));
}

#[test]
fn test_removal_keeps_relative_order() {
    let mut registry = OrderedItemRegistry::new();
    for (i, id) in ["a", "b", "c", "d"].iter().enumerate() {
        registry.register(*id, ItemRank::at(i), false, ());
    }
    registry.unregister("b");
    assert_eq!(ids(&registry), vec!["a", "c", "d"]);
    assert!(registry.unregister("missing").is_none());
}

#[test]
fn test_nested_ranks_interleave_groups() {
    let mut registry = OrderedItemRegistry::new();
    let group = ItemRank::at(1);
    registry.register("after", ItemRank::at(2), false, ());
    registry.register("inner-b", group.child(1), false, ());
    registry.register("before", ItemRank::at(0), false, ());
    registry.register("inner-a", group.child(0), false, ());
    assert_eq!(ids(&registry), vec!["before", "inner-a", "inner-b", "after"]);
}

#[test]
fn test_stale_token_does_not_remove_reregistered_item() {
    let mut registry = OrderedItemRegistry::new();
    let first = registry.register("a", ItemRank::at(0), false, "old");
    let second = registry.register("a", ItemRank::at(0), false, "new");

    assert!(registry.unregister_token("a", first).is_none());
    assert_eq!(registry.get("a").map(|record| record.payload), Some("new"));
    assert!(registry.unregister_token("a", second).is_some());
    assert!(registry.is_empty());
}

// ============================================================================
// Highlight over a live registry
// ============================================================================

#[test]
fn test_open_settle_navigate_and_remove() {
    let mut registry = OrderedItemRegistry::new();
    let mut disclosure = Disclosure::new();
    let mut highlight = RovingHighlight::new(MenuNavigation);

    assert_eq!(disclosure.toggle(), Transition::Opened);
    // Items register between the two phases of opening.
    for (i, id) in ["settings", "profile", "logout"].iter().enumerate() {
        registry.register(*id, ItemRank::at(i), false, ());
    }
    assert!(disclosure.take_pending_highlight());
    assert_eq!(highlight.highlight_for_open(registry.order(), None), Some("settings"));

    assert_eq!(highlight.move_next(registry.order()), Some("profile"));
    registry.unregister("profile");
    assert!(highlight.retain(registry.order()));
    assert_eq!(highlight.highlighted(), None);

    assert_eq!(highlight.move_previous(registry.order()), Some("settings"));
    assert_eq!(highlight.move_previous(registry.order()), Some("logout"));
}

#[test]
fn test_empty_order_is_a_no_op() {
    let registry: OrderedItemRegistry<()> = OrderedItemRegistry::new();
    let mut highlight = RovingHighlight::new(MenuNavigation);
    assert_eq!(highlight.move_next(registry.order()), None);
    assert_eq!(highlight.move_last(registry.order()), None);
    assert_eq!(highlight.highlight_for_open(registry.order(), None), None);
}

#[test]
fn test_listbox_opens_on_selected_item() {
    let mut registry = OrderedItemRegistry::new();
    for (i, id) in ["en", "fr", "es"].iter().enumerate() {
        registry.register(*id, ItemRank::at(i), false, ());
    }
    let mut highlight = RovingHighlight::new(ListboxNavigation);
    assert_eq!(highlight.highlight_for_open(registry.order(), Some("es")), Some("es"));
    assert_eq!(
        highlight.highlight_for_open(registry.order(), Some("missing")),
        Some("en")
    );
}

#[test]
fn test_tab_navigation_skips_disabled() {
    let mut registry = OrderedItemRegistry::new();
    registry.register("a", ItemRank::at(0), false, ());
    registry.register("b", ItemRank::at(1), true, ());
    registry.register("c", ItemRank::at(2), false, ());
    let mut highlight = RovingHighlight::new(TabNavigation);

    assert_eq!(highlight.move_first(registry.order()), Some("a"));
    assert_eq!(highlight.move_next(registry.order()), Some("c"));
    assert_eq!(highlight.move_next(registry.order()), Some("a"));

    registry.set_disabled("b", false);
    assert_eq!(highlight.move_next(registry.order()), Some("b"));
}

#[test]
fn test_all_disabled_tabs_have_no_target() {
    let mut registry = OrderedItemRegistry::new();
    registry.register("a", ItemRank::at(0), true, ());
    let mut highlight = RovingHighlight::new(TabNavigation);
    assert_eq!(highlight.move_next(registry.order()), None);
    assert_eq!(highlight.move_first(registry.order()), None);
}

// ============================================================================
// Disclosure laws and popup keys
// ============================================================================

#[test]
fn test_close_is_idempotent() {
    let mut disclosure = Disclosure::new();
    assert_eq!(disclosure.close(), None);
    disclosure.open();
    assert_eq!(disclosure.close(), Some(Transition::Closed));
    assert_eq!(disclosure.close(), None);
    assert!(!disclosure.has_pending_highlight());
}

#[test]
fn test_popup_key_mapping() {
    assert_eq!(
        PopupKey::from_key(&KeyCombo::key(Key::Escape)),
        Some(PopupKey::Dismiss { passthrough: false })
    );
    assert_eq!(
        PopupKey::from_key(&KeyCombo::key(Key::BackTab)),
        Some(PopupKey::Dismiss { passthrough: true })
    );
    assert_eq!(
        PopupKey::from_key(&KeyCombo::key(Key::SPACE)),
        Some(PopupKey::Activate)
    );
    assert_eq!(PopupKey::from_key(&KeyCombo::key(Key::Down).alt()), None);
    assert_eq!(PopupKey::from_key(&KeyCombo::key(Key::Char('x'))), None);
}

// ============================================================================
// Controlled values
// ============================================================================

#[test]
fn test_controlled_value_ignores_internal_writes() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let callback: ChangeCallback<String> =
        Arc::new(move |v: &String| sink.lock().unwrap().push(v.clone()));
    let mut value =
        ControllableValue::new(Some("a".to_string()), "x".to_string(), Some(callback));

    value.set_value("b".to_string());
    assert_eq!(value.current(), "a");
    assert_eq!(*seen.lock().unwrap(), vec!["b".to_string()]);

    value.set_external(None);
    // Internal state kept its initial value while controlled.
    assert_eq!(value.current(), "x");
    value.set_value("c".to_string());
    assert_eq!(value.current(), "c");
}
