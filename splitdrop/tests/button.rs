use std::sync::{Arc, Mutex};

use splitdrop::{ActivationMode, Dropdown, DropdownConfig, EventResult};
use splitdrop_dom::InputBus;

type Recorded = Arc<Mutex<Vec<&'static str>>>;

fn split_button(bus: &InputBus) -> (Dropdown<&'static str>, Recorded) {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = recorded.clone();
    let dropdown = Dropdown::new(
        DropdownConfig::new("menu", [("Save", "save"), ("Copy", "copy"), ("Upload", "upload")])
            .placeholder("Save")
            .whole_button_actionable(true)
            .on_selection_change(move |value: &&'static str| sink.lock().unwrap().push(*value)),
        bus.clone(),
    )
    .unwrap();
    (dropdown, recorded)
}

// ============================================================================
// Primary surface
// ============================================================================

#[test]
fn test_primary_replays_first_option() {
    let bus = InputBus::new();
    let (dropdown, recorded) = split_button(&bus);

    assert_eq!(dropdown.mode(), ActivationMode::Button);
    assert_eq!(dropdown.dispatch_click("menu-selected"), EventResult::Handled);

    assert!(!dropdown.is_open());
    assert!(!dropdown.is_subscribed());
    assert_eq!(*recorded.lock().unwrap(), vec!["save"]);
}

#[test]
fn test_label_click_bubbles_to_primary() {
    let bus = InputBus::new();
    let (dropdown, recorded) = split_button(&bus);

    assert_eq!(dropdown.dispatch_click("menu-label"), EventResult::Handled);
    assert_eq!(*recorded.lock().unwrap(), vec!["save"]);
}

#[test]
fn test_arrow_does_not_open() {
    let bus = InputBus::new();
    let (dropdown, recorded) = split_button(&bus);

    // The arrow has no handler of its own; the press reaches the primary.
    assert_eq!(dropdown.dispatch_click("menu-arrow"), EventResult::Handled);

    assert!(!dropdown.is_open());
    assert_eq!(bus.subscription_count(), 0);
    assert_eq!(*recorded.lock().unwrap(), vec!["save"]);
}

#[test]
fn test_default_action_leaves_state_alone() {
    let bus = InputBus::new();
    let (dropdown, recorded) = split_button(&bus);

    dropdown.toggle_open();
    dropdown.invoke_default_action();

    assert!(dropdown.is_open());
    assert!(dropdown.is_subscribed());
    assert_eq!(*recorded.lock().unwrap(), vec!["save"]);
}

// ============================================================================
// Last selection
// ============================================================================

#[test]
fn test_replays_last_selection() {
    let bus = InputBus::new();
    let (dropdown, recorded) = split_button(&bus);

    dropdown.toggle_open();
    dropdown.select_option(2);
    assert!(!dropdown.is_open());

    dropdown.dispatch_click("menu-selected");
    dropdown.dispatch_click("menu-selected");

    assert_eq!(*recorded.lock().unwrap(), vec!["upload", "upload", "upload"]);
    assert_eq!(dropdown.last_selected().label, "Upload");
}

#[test]
fn test_option_click_reports_once() {
    let bus = InputBus::new();
    let (dropdown, recorded) = split_button(&bus);

    dropdown.toggle_open();
    assert_eq!(dropdown.dispatch_click("menu-1"), EventResult::Handled);

    // The option list is not inside the primary surface.
    assert_eq!(*recorded.lock().unwrap(), vec!["copy"]);
    assert!(!dropdown.is_open());
}
