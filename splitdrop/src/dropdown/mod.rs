//! Dropdown widget - a selector that can also act as a split button.

mod events;
mod monitor;
mod render;
mod routing;
mod state;

use std::fmt;
use std::sync::{Arc, Mutex, RwLock};

use splitdrop_dom::PointerSource;

use crate::config::{DropdownConfig, DropdownOption, SelectionCallback};
use crate::error::ConfigError;

pub use events::EventResult;
pub use monitor::{DismissMonitor, MonitorState};
pub use routing::{Action, ActivationMode, Route, Surface};
pub use state::WidgetState;

use render::Boundary;

/// Shared widget internals.
///
/// Pointer listeners hold a `Weak` to this, so the input source never keeps
/// a dropped widget alive.
pub(crate) struct Core<T> {
    id: String,
    options: Vec<DropdownOption<T>>,
    placeholder: String,
    on_selection_change: Option<SelectionCallback<T>>,
    show_divider: bool,
    mode: ActivationMode,
    disable_arrow_hover_shadow: bool,
    class: Option<String>,

    state: RwLock<WidgetState>,
    monitor: Mutex<DismissMonitor>,
    /// Element IDs of the last rendered tree, with their parents.
    boundary: RwLock<Boundary>,
    source: Arc<dyn PointerSource>,
}

/// A mounted dropdown instance.
///
/// Dropping it unmounts the widget: an outstanding pointer subscription is
/// released immediately, whether or not the widget was open.
///
/// # Example
///
/// ```ignore
/// let bus = InputBus::new();
/// let dropdown = Dropdown::new(
///     DropdownConfig::new("menu", [("Copy", Op::Copy), ("Move", Op::Move)])
///         .placeholder("Copy")
///         .on_selection_change(|op| run(*op)),
///     bus.clone(),
/// )?;
///
/// // Each frame:
/// let tree = dropdown.render();
/// // For each pointer event read from the terminal:
/// bus.dispatch(&event);
/// dropdown.handle_event(&event);
/// ```
pub struct Dropdown<T: Send + Sync + 'static> {
    core: Arc<Core<T>>,
}

impl<T: Send + Sync + 'static> Dropdown<T> {
    /// Mount a dropdown that watches `source` for outside presses while open.
    ///
    /// Fails if the configuration has an empty ID or no options.
    pub fn new(
        config: DropdownConfig<T>,
        source: impl PointerSource + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mode = config.mode();

        let core = Arc::new(Core {
            id: config.id,
            options: config.options,
            placeholder: config.placeholder,
            on_selection_change: config.on_selection_change,
            show_divider: config.show_divider,
            mode,
            disable_arrow_hover_shadow: config.disable_arrow_hover_shadow,
            class: config.class,
            state: RwLock::new(WidgetState::default()),
            monitor: Mutex::new(DismissMonitor::new()),
            boundary: RwLock::new(Boundary::default()),
            source: Arc::new(source),
        });

        // Seed the boundary so presses on the widget count as inside even
        // before the host renders it for the first time.
        core.render();

        log::debug!(
            "Dropdown::new id={} mode={:?} options={}",
            core.id,
            core.mode,
            core.options.len()
        );

        Ok(Self { core })
    }

    pub fn id(&self) -> &str {
        &self.core.id
    }

    pub fn options(&self) -> &[DropdownOption<T>] {
        &self.core.options
    }

    pub fn placeholder(&self) -> &str {
        &self.core.placeholder
    }

    pub fn mode(&self) -> ActivationMode {
        self.core.mode
    }

    /// Snapshot of the open flag and last selection.
    pub fn state(&self) -> WidgetState {
        self.core.state()
    }

    pub fn is_open(&self) -> bool {
        self.core.state().is_open
    }

    /// The option a button-mode activation replays.
    pub fn last_selected(&self) -> &DropdownOption<T> {
        self.core.last_selected()
    }

    /// Whether the outside-dismissal monitor currently holds a subscription.
    pub fn is_subscribed(&self) -> bool {
        self.core.monitor_state() != MonitorState::Unsubscribed
    }

    pub fn monitor_state(&self) -> MonitorState {
        self.core.monitor_state()
    }

    /// Whether `element_id` is part of the last rendered tree.
    pub fn contains(&self, element_id: &str) -> bool {
        self.core.boundary_contains(element_id)
    }
}

impl<T> Core<T> {
    fn state(&self) -> WidgetState {
        self.state.read().map(|guard| *guard).unwrap_or_default()
    }

    fn last_selected(&self) -> &DropdownOption<T> {
        // Construction guarantees at least one option and every write
        // to `last_selected` is bounds-checked.
        let index = self.state().last_selected;
        self.options.get(index).unwrap_or(&self.options[0])
    }

    fn monitor_state(&self) -> MonitorState {
        self.monitor
            .lock()
            .map(|guard| guard.state())
            .unwrap_or_default()
    }
}

impl<T: Send + Sync + 'static> Drop for Dropdown<T> {
    fn drop(&mut self) {
        log::debug!("Dropdown::drop id={}", self.core.id);
        self.core.unmount();
    }
}

impl<T: Send + Sync + fmt::Debug + 'static> fmt::Debug for Dropdown<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dropdown")
            .field("id", &self.core.id)
            .field("mode", &self.core.mode)
            .field("options", &self.core.options)
            .field("state", &self.core.state())
            .field("monitor", &self.core.monitor_state())
            .finish()
    }
}
