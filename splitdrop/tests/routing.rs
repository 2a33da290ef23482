use splitdrop::{Action, ActivationMode, Route, Surface};

// ============================================================================
// Routing table
// ============================================================================

#[test]
fn test_selector_routes() {
    let mode = ActivationMode::Selector;

    assert_eq!(mode.route(Surface::Primary), None);
    assert_eq!(
        mode.route(Surface::Arrow),
        Some(Route {
            action: Action::ToggleOpen,
            stop_propagation: true,
        })
    );
    assert_eq!(
        mode.route(Surface::Option(3)),
        Some(Route {
            action: Action::SelectOption(3),
            stop_propagation: false,
        })
    );
}

#[test]
fn test_button_routes() {
    let mode = ActivationMode::Button;

    assert_eq!(
        mode.route(Surface::Primary),
        Some(Route {
            action: Action::InvokeDefault,
            stop_propagation: false,
        })
    );
    assert_eq!(mode.route(Surface::Arrow), None);
    assert_eq!(
        mode.route(Surface::Option(0)),
        Some(Route {
            action: Action::SelectOption(0),
            stop_propagation: false,
        })
    );
}

#[test]
fn test_actionable_surfaces() {
    assert!(ActivationMode::Selector.is_actionable(Surface::Arrow));
    assert!(!ActivationMode::Selector.is_actionable(Surface::Primary));
    assert!(ActivationMode::Button.is_actionable(Surface::Primary));
    assert!(!ActivationMode::Button.is_actionable(Surface::Arrow));
}

#[test]
fn test_mode_from_flag() {
    assert_eq!(
        ActivationMode::from_whole_button_actionable(false),
        ActivationMode::Selector
    );
    assert_eq!(
        ActivationMode::from_whole_button_actionable(true),
        ActivationMode::Button
    );
    assert_eq!(ActivationMode::default(), ActivationMode::Selector);
}
