//! Construction errors.

use thiserror::Error;

/// A dropdown configuration that cannot produce a usable widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No options were supplied, so there is no initial selection to replay.
    #[error("dropdown '{id}' has no options")]
    EmptyOptions { id: String },
    /// Option element IDs are derived from the widget ID and would collide.
    #[error("dropdown id must not be empty")]
    EmptyId,
}
