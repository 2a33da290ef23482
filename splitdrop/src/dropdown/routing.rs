//! Activation routing table.
//!
//! Which surface owns a click depends on the widget's mode. The table lives
//! here as data so every (mode, surface) pair has exactly one answer.

/// How pointer activation is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationMode {
    /// The arrow toggles the option list; the rest of the row is inert.
    #[default]
    Selector,
    /// The whole row replays the last selection; the arrow is decorative.
    Button,
}

/// A clickable region of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The row holding the label, divider and arrow.
    Primary,
    /// The region around the arrow glyph, nested inside `Primary`.
    Arrow,
    /// An entry of the option list, by position.
    Option(usize),
}

/// What an activation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Report the last selected value without opening anything.
    InvokeDefault,
    /// Flip the open/closed state.
    ToggleOpen,
    /// Close and report the value of the option at this index.
    SelectOption(usize),
}

/// Handler bound to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub action: Action,
    /// Keep the activation from reaching enclosing surfaces.
    pub stop_propagation: bool,
}

impl Route {
    const fn bubbling(action: Action) -> Self {
        Self {
            action,
            stop_propagation: false,
        }
    }

    const fn swallowing(action: Action) -> Self {
        Self {
            action,
            stop_propagation: true,
        }
    }
}

impl ActivationMode {
    pub const fn from_whole_button_actionable(actionable: bool) -> Self {
        if actionable { Self::Button } else { Self::Selector }
    }

    /// The handler a surface has in this mode, or None if it has none.
    pub const fn route(self, surface: Surface) -> Option<Route> {
        match (self, surface) {
            (Self::Button, Surface::Primary) => Some(Route::bubbling(Action::InvokeDefault)),
            (Self::Button, Surface::Arrow) => None,
            (Self::Selector, Surface::Primary) => None,
            (Self::Selector, Surface::Arrow) => Some(Route::swallowing(Action::ToggleOpen)),
            (_, Surface::Option(index)) => Some(Route::bubbling(Action::SelectOption(index))),
        }
    }

    /// Whether the surface has a handler and should be marked clickable.
    pub const fn is_actionable(self, surface: Surface) -> bool {
        self.route(surface).is_some()
    }
}
