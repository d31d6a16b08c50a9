//! Error types for the MediDesk console.
//!
//! Every fallible operation returns `DeskResult<T>`. Front ends show the
//! `Display` text of a `DeskError` directly to the operator, so variants carry
//! enough context to be read without a stack trace.

use chrono::NaiveDate;
use thiserror::Error;

use crate::form::FormErrors;

/// The unified error type for the MediDesk crates.
#[derive(Debug, Error)]
pub enum DeskError {
    /// One or more form fields failed validation. Nothing was written.
    #[error("form validation failed: {0}")]
    Validation(FormErrors),

    /// An edit or status change targeted a record that does not exist.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    /// The chosen date is disabled in the scheduling calendar.
    #[error("{date} is not available for scheduling (past date or weekend)")]
    DateUnavailable { date: NaiveDate },

    /// Operator-supplied text could not be parsed into the expected type.
    #[error("invalid value '{value}' for {field}")]
    InvalidValue { field: &'static str, value: String },

    /// A repository could not read or write its backing store.
    #[error("storage failed: {reason}")]
    StorageFailed { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the MediDesk crates.
pub type DeskResult<T> = Result<T, DeskError>;
