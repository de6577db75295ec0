#![forbid(unsafe_code)]

//! Board construction errors.
//!
//! Runtime navigation never fails: out-of-range requests are clamped or
//! ignored. The only failures happen while building a board from a theme.

use std::fmt;

/// Errors raised while building a tile board.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    /// A theme value cannot produce a usable grid.
    InvalidConfiguration {
        /// Name of the offending theme field.
        field: &'static str,
        /// The rejected value, formatted for diagnostics.
        value: String,
        /// What the field requires.
        message: &'static str,
    },
    /// The theme document could not be parsed.
    Theme(String),
}

impl BoardError {
    pub(crate) fn invalid(
        field: &'static str,
        value: impl fmt::Display,
        message: &'static str,
    ) -> Self {
        Self::InvalidConfiguration {
            field,
            value: value.to_string(),
            message,
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                field,
                value,
                message,
            } => write!(f, "invalid configuration: {field}={value} ({message})"),
            Self::Theme(msg) => write!(f, "theme parse failed: {msg}"),
        }
    }
}

impl std::error::Error for BoardError {}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Theme(err.to_string())
    }
}

/// Result type for board construction.
pub type Result<T> = std::result::Result<T, BoardError>;
