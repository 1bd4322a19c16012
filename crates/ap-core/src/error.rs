//! Core error type.
//!
//! Downstream crates wrap `CoreError` as one variant of their own enum via a
//! `#[from]` conversion.

use thiserror::Error;

/// Errors raised while validating run inputs.
///
/// Missing optional data (an absent arrival curve, empty resource lists) is
/// never an error; only values that are present but out of range are.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// A configuration value is present but invalid.  `field` names the
    /// offending input, e.g. `flights[2].fill_fraction`.
    #[error("configuration error in {field}: {reason}")]
    Config { field: String, reason: String },

    #[error("clock time {hour:02}:{minute:02} is out of range")]
    ClockTime { hour: u32, minute: u32 },
}

impl CoreError {
    pub(crate) fn config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::Config {
            field:  field.into(),
            reason: reason.into(),
        }
    }
}

/// Shorthand result type for `ap-core`.
pub type CoreResult<T> = Result<T, CoreError>;
