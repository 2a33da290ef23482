//! Dropdown widget state.

/// Open/closed flag and the option a button-mode click replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetState {
    /// Whether the option list is shown.
    pub is_open: bool,
    /// Index of the most recently chosen option; starts at the first one.
    pub last_selected: usize,
}

impl WidgetState {
    /// Set the open flag. Returns true if it changed.
    pub fn set_open(&mut self, open: bool) -> bool {
        if self.is_open == open {
            return false;
        }
        self.is_open = open;
        true
    }
}
