//! splitdrop - a selector widget that doubles as a split button.
//!
//! In selector mode the arrow opens a list of options and picking one
//! reports its value. In button mode the whole row is a button that replays
//! the last chosen value. While open, the widget watches the process-wide
//! pointer stream and closes itself when the user presses anywhere else.

pub mod arrow;
pub mod config;
pub mod dropdown;
pub mod error;

pub use arrow::ArrowTone;
pub use config::{DropdownConfig, DropdownOption, SelectionCallback};
pub use dropdown::{
    Action, ActivationMode, DismissMonitor, Dropdown, EventResult, MonitorState, Route, Surface,
    WidgetState,
};
pub use error::ConfigError;
