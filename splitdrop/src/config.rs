//! Dropdown configuration.

use std::fmt;
use std::sync::Arc;

use crate::dropdown::ActivationMode;
use crate::error::ConfigError;

/// Callback receiving the value of the chosen option.
pub type SelectionCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// One entry in the option list. Identity is its position in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOption<T> {
    pub label: String,
    pub value: T,
}

impl<T> DropdownOption<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl<T, S: Into<String>> From<(S, T)> for DropdownOption<T> {
    fn from((label, value): (S, T)) -> Self {
        Self::new(label, value)
    }
}

/// Per-instance configuration, fixed for the widget's lifetime.
///
/// # Example
///
/// ```ignore
/// let config = DropdownConfig::new("export", [("PNG", Format::Png), ("SVG", Format::Svg)])
///     .placeholder("Export")
///     .whole_button_actionable(true)
///     .on_selection_change(|format| save(*format));
/// ```
pub struct DropdownConfig<T> {
    /// Prefix for derived element IDs (`{id}-{index}` for options).
    pub id: String,

    /// Options in display order. Must not be empty.
    pub options: Vec<DropdownOption<T>>,

    /// Text shown on the primary surface.
    pub placeholder: String,

    /// Invoked with the chosen value. Absent means selections are silent.
    pub on_selection_change: Option<SelectionCallback<T>>,

    /// Draw a separator between the label and the arrow.
    pub show_divider: bool,

    /// Button mode: the whole row replays the last selection and the arrow
    /// does nothing on its own.
    pub whole_button_actionable: bool,

    /// Suppress the arrow's hover highlight.
    pub disable_arrow_hover_shadow: bool,

    /// Extra class name attached to the root element for host styling.
    pub class: Option<String>,
}

impl<T> DropdownConfig<T> {
    /// Create a config with the given ID and options and default flags.
    pub fn new<O>(id: impl Into<String>, options: impl IntoIterator<Item = O>) -> Self
    where
        O: Into<DropdownOption<T>>,
    {
        Self {
            id: id.into(),
            options: options.into_iter().map(Into::into).collect(),
            placeholder: String::new(),
            on_selection_change: None,
            show_divider: true,
            whole_button_actionable: false,
            disable_arrow_hover_shadow: false,
            class: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn on_selection_change(mut self, callback: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on_selection_change = Some(Arc::new(callback));
        self
    }

    pub fn show_divider(mut self, show: bool) -> Self {
        self.show_divider = show;
        self
    }

    pub fn whole_button_actionable(mut self, actionable: bool) -> Self {
        self.whole_button_actionable = actionable;
        self
    }

    pub fn disable_arrow_hover_shadow(mut self, disable: bool) -> Self {
        self.disable_arrow_hover_shadow = disable;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Activation routing selected by `whole_button_actionable`.
    pub fn mode(&self) -> ActivationMode {
        ActivationMode::from_whole_button_actionable(self.whole_button_actionable)
    }

    /// Check the caller contract: a non-empty ID and at least one option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id.is_empty() {
            return Err(ConfigError::EmptyId);
        }
        if self.options.is_empty() {
            return Err(ConfigError::EmptyOptions {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for DropdownConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownConfig")
            .field("id", &self.id)
            .field("options", &self.options)
            .field("placeholder", &self.placeholder)
            .field("on_selection_change", &self.on_selection_change.is_some())
            .field("show_divider", &self.show_divider)
            .field("whole_button_actionable", &self.whole_button_actionable)
            .field("disable_arrow_hover_shadow", &self.disable_arrow_hover_shadow)
            .field("class", &self.class)
            .finish()
    }
}
