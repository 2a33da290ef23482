//! State transitions and click routing for the dropdown.

use std::sync::Arc;

use splitdrop_dom::{MouseButton, PointerEvent};

use super::routing::{Action, Surface};
use super::{Core, Dropdown};

/// Result of routing an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// No surface along the path had a handler.
    Ignored,
    /// A handler ran and the activation kept bubbling.
    Handled,
    /// A handler ran and stopped propagation.
    Consumed,
}

impl EventResult {
    /// Check if any handler ran.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

impl<T: Send + Sync + 'static> Dropdown<T> {
    /// Flip the open/closed state.
    pub fn toggle_open(&self) {
        self.core.toggle_open();
    }

    /// Close the option list. No-op when already closed.
    pub fn close(&self) {
        self.core.set_open(false);
    }

    /// Choose the option at `index`: close, remember it, report its value.
    /// Out-of-range indices are ignored.
    pub fn select_option(&self, index: usize) {
        self.core.select_option(index);
    }

    /// Report the last selected value without touching the open state.
    pub fn invoke_default_action(&self) {
        self.core.invoke_default_action();
    }

    /// Route an activation on `target` through the routing table.
    ///
    /// The activation starts at `target` and bubbles through its ancestors
    /// in the last rendered tree until a handler stops it. Targets outside
    /// the widget are ignored.
    pub fn dispatch_click(&self, target: &str) -> EventResult {
        self.core.dispatch_click(target)
    }

    /// Handle a host pointer event. Only primary-button clicks activate.
    pub fn handle_event(&self, event: &PointerEvent) -> EventResult {
        match event {
            PointerEvent::Click {
                target: Some(target),
                button: MouseButton::Left,
                ..
            } => self.dispatch_click(target),
            _ => EventResult::Ignored,
        }
    }
}

impl<T: Send + Sync + 'static> Core<T> {
    pub(super) fn toggle_open(self: &Arc<Self>) {
        let open = !self.state().is_open;
        self.set_open(open);
    }

    /// Apply the open flag and move the dismissal monitor across the edge.
    pub(super) fn set_open(self: &Arc<Self>, open: bool) {
        let changed = match self.state.write() {
            Ok(mut guard) => guard.set_open(open),
            Err(_) => {
                log::warn!("Dropdown {}: state lock poisoned, ignoring set_open", self.id);
                return;
            }
        };
        if !changed {
            return;
        }

        log::debug!(
            "Dropdown {}: {}",
            self.id,
            if open { "opened" } else { "closed" }
        );
        self.sync_monitor(open);
    }

    fn sync_monitor(self: &Arc<Self>, open: bool) {
        let Ok(mut monitor) = self.monitor.lock() else {
            log::warn!("Dropdown {}: monitor lock poisoned", self.id);
            return;
        };

        if open {
            let inside = Arc::downgrade(self);
            let dismiss = Arc::downgrade(self);
            monitor.attach(
                self.source.as_ref(),
                move |target| {
                    inside
                        .upgrade()
                        .is_some_and(|core| core.boundary_contains(target))
                },
                move || {
                    if let Some(core) = dismiss.upgrade() {
                        log::debug!("Dropdown {}: pointer-down outside, dismissing", core.id);
                        core.set_open(false);
                    }
                },
            );
        } else {
            monitor.detach(self.source.as_ref());
        }
    }

    pub(super) fn select_option(self: &Arc<Self>, index: usize) {
        let Some(option) = self.options.get(index) else {
            log::warn!(
                "Dropdown {}: option {} out of range ({} options)",
                self.id,
                index,
                self.options.len()
            );
            return;
        };

        if let Ok(mut guard) = self.state.write() {
            guard.last_selected = index;
        }
        self.set_open(false);

        log::debug!("Dropdown {}: selected option {} ({})", self.id, index, option.label);
        self.notify(&option.value);
    }

    pub(super) fn invoke_default_action(&self) {
        let option = self.last_selected();
        log::debug!("Dropdown {}: default action ({})", self.id, option.label);
        self.notify(&option.value);
    }

    fn notify(&self, value: &T) {
        // No locks are held here; the callback may query the widget.
        if let Some(callback) = &self.on_selection_change {
            callback(value);
        }
    }

    /// Unmount: release the pointer subscription on every path out.
    pub(super) fn unmount(&self) {
        if let Ok(mut monitor) = self.monitor.lock() {
            monitor.detach(self.source.as_ref());
        }
    }

    pub(super) fn dispatch_click(self: &Arc<Self>, target: &str) -> EventResult {
        let path = self.bubble_path(target);
        if path.is_empty() {
            log::trace!("Dropdown {}: click on foreign element {}", self.id, target);
            return EventResult::Ignored;
        }

        let mut result = EventResult::Ignored;
        for element_id in &path {
            let Some(surface) = self.surface_of(element_id) else {
                continue;
            };
            let Some(route) = self.mode.route(surface) else {
                log::trace!("Dropdown {}: {:?} has no handler in {:?} mode", self.id, surface, self.mode);
                continue;
            };

            log::debug!("Dropdown {}: {:?} -> {:?}", self.id, surface, route.action);
            self.perform(route.action);

            if route.stop_propagation {
                return EventResult::Consumed;
            }
            result = EventResult::Handled;
        }
        result
    }

    fn perform(self: &Arc<Self>, action: Action) {
        match action {
            Action::InvokeDefault => self.invoke_default_action(),
            Action::ToggleOpen => self.toggle_open(),
            Action::SelectOption(index) => self.select_option(index),
        }
    }

    /// Map an element ID of this widget to the surface it represents.
    pub(super) fn surface_of(&self, element_id: &str) -> Option<Surface> {
        let suffix = element_id.strip_prefix(self.id.as_str())?.strip_prefix('-')?;
        match suffix {
            "selected" => Some(Surface::Primary),
            "arrow" => Some(Surface::Arrow),
            _ => {
                // Reject "01", "+1" and friends; only canonical indices name options.
                let index: usize = suffix.parse().ok()?;
                (index.to_string() == suffix && index < self.options.len())
                    .then_some(Surface::Option(index))
            }
        }
    }
}
