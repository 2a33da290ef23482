use std::sync::{Arc, Mutex};

use splitdrop::{Dropdown, DropdownConfig, EventResult};
use splitdrop_dom::{InputBus, MouseButton, PointerEvent};

type Recorded = Arc<Mutex<Vec<&'static str>>>;

fn selector(bus: &InputBus) -> (Dropdown<&'static str>, Recorded) {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = recorded.clone();
    let dropdown = Dropdown::new(
        DropdownConfig::new("menu", [("Alpha", "a"), ("Beta", "b"), ("Gamma", "c")])
            .placeholder("Choose")
            .on_selection_change(move |value: &&'static str| sink.lock().unwrap().push(*value)),
        bus.clone(),
    )
    .unwrap();
    (dropdown, recorded)
}

fn click(target: &str, button: MouseButton) -> PointerEvent {
    PointerEvent::Click {
        target: Some(target.to_string()),
        x: 0,
        y: 0,
        button,
    }
}

// ============================================================================
// Arrow
// ============================================================================

#[test]
fn test_arrow_toggles_open() {
    let bus = InputBus::new();
    let (dropdown, recorded) = selector(&bus);

    assert_eq!(dropdown.dispatch_click("menu-arrow"), EventResult::Consumed);
    assert!(dropdown.is_open());
    assert!(dropdown.is_subscribed());

    assert_eq!(dropdown.dispatch_click("menu-arrow"), EventResult::Consumed);
    assert!(!dropdown.is_open());
    assert!(!dropdown.is_subscribed());

    assert!(recorded.lock().unwrap().is_empty());
}

#[test]
fn test_glyph_click_bubbles_to_arrow() {
    let bus = InputBus::new();
    let (dropdown, _) = selector(&bus);

    assert_eq!(dropdown.dispatch_click("menu-arrow-glyph"), EventResult::Consumed);
    assert!(dropdown.is_open());
}

#[test]
fn test_primary_is_inert() {
    let bus = InputBus::new();
    let (dropdown, recorded) = selector(&bus);

    assert_eq!(dropdown.dispatch_click("menu-selected"), EventResult::Ignored);
    assert_eq!(dropdown.dispatch_click("menu-label"), EventResult::Ignored);
    assert_eq!(dropdown.dispatch_click("menu-divider"), EventResult::Ignored);

    assert!(!dropdown.is_open());
    assert!(recorded.lock().unwrap().is_empty());
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_select_option_reports_value_and_closes() {
    let bus = InputBus::new();
    let (dropdown, recorded) = selector(&bus);

    dropdown.dispatch_click("menu-arrow");
    assert_eq!(dropdown.dispatch_click("menu-1"), EventResult::Handled);

    assert!(!dropdown.is_open());
    assert!(!dropdown.is_subscribed());
    assert_eq!(*recorded.lock().unwrap(), vec!["b"]);
    assert_eq!(dropdown.last_selected().label, "Beta");
    assert_eq!(bus.subscription_count(), 0);
}

#[test]
fn test_option_ids_follow_positions() {
    let bus = InputBus::new();
    let (dropdown, recorded) = selector(&bus);

    for target in ["menu-0", "menu-1", "menu-2"] {
        dropdown.toggle_open();
        dropdown.dispatch_click(target);
    }

    assert_eq!(*recorded.lock().unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn test_non_canonical_ids_are_not_options() {
    let bus = InputBus::new();
    let (dropdown, recorded) = selector(&bus);

    dropdown.toggle_open();
    assert_eq!(dropdown.dispatch_click("menu-01"), EventResult::Ignored);
    assert_eq!(dropdown.dispatch_click("menu-3"), EventResult::Ignored);
    assert_eq!(dropdown.dispatch_click("other-0"), EventResult::Ignored);

    assert!(dropdown.is_open());
    assert!(recorded.lock().unwrap().is_empty());
}

#[test]
fn test_out_of_range_select_is_ignored() {
    let bus = InputBus::new();
    let (dropdown, recorded) = selector(&bus);

    dropdown.toggle_open();
    dropdown.select_option(7);

    assert!(dropdown.is_open());
    assert_eq!(dropdown.state().last_selected, 0);
    assert!(recorded.lock().unwrap().is_empty());
}

#[test]
fn test_close_is_idempotent() {
    let bus = InputBus::new();
    let (dropdown, _) = selector(&bus);

    dropdown.close();
    assert!(!dropdown.is_open());

    dropdown.toggle_open();
    dropdown.close();
    dropdown.close();
    assert!(!dropdown.is_open());
    assert_eq!(bus.subscription_count(), 0);
}

// ============================================================================
// Host events
// ============================================================================

#[test]
fn test_handle_event_only_left_clicks() {
    let bus = InputBus::new();
    let (dropdown, _) = selector(&bus);

    assert_eq!(
        dropdown.handle_event(&click("menu-arrow", MouseButton::Right)),
        EventResult::Ignored
    );
    assert!(!dropdown.is_open());

    let press = PointerEvent::Down {
        target: Some("menu-arrow".to_string()),
        x: 0,
        y: 0,
        button: MouseButton::Left,
    };
    assert_eq!(dropdown.handle_event(&press), EventResult::Ignored);

    assert_eq!(
        dropdown.handle_event(&click("menu-arrow", MouseButton::Left)),
        EventResult::Consumed
    );
    assert!(dropdown.is_open());
}

#[test]
fn test_silent_without_callback() {
    let bus = InputBus::new();
    let dropdown = Dropdown::new(
        DropdownConfig::<u8>::new("quiet", [("One", 1), ("Two", 2)]),
        bus.clone(),
    )
    .unwrap();

    dropdown.toggle_open();
    dropdown.select_option(1);

    assert!(!dropdown.is_open());
    assert_eq!(dropdown.last_selected().value, 2);
}
