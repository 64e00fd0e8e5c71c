//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every failure a ledger operation can hit is
//! returned to the caller as one of these variants; nothing in the library
//! panics on bad user input.

use thiserror::Error;

use crate::models::MoneyParseError;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors (snapshot files that cannot be read or written)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// The supplied amount is not a number
    #[error("Invalid amount: '{0}'. Please enter a number like 12.50 or -40")]
    InvalidAmount(String),

    /// The supplied amount is a number beyond the supported range
    #[error("Amount out of range: '{0}'. Amounts are limited to 999999999999.99")]
    AmountOutOfRange(String),

    /// A computed total does not fit the amount type
    #[error("Total too large to compute: {0}")]
    Overflow(String),

    /// The supplied index is not an integer
    #[error("Invalid input: '{0}'. Please enter a valid number")]
    InvalidIndex(String),

    /// The supplied date is not YYYY-MM-DD
    #[error("Invalid date: '{0}'. Use the format YYYY-MM-DD")]
    InvalidDate(String),

    /// A 1-based position outside of the ledger; `index` is the number as entered
    #[error("Invalid selection: {index} is not between 1 and {len}")]
    IndexOutOfRange { index: String, len: usize },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for saved profiles
    pub fn profile_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Profile",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from user input the caller can re-prompt for
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::AmountOutOfRange(_)
                | Self::InvalidIndex(_)
                | Self::InvalidDate(_)
                | Self::IndexOutOfRange { .. }
                | Self::Validation(_)
        )
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<MoneyParseError> for TrackerError {
    fn from(err: MoneyParseError) -> Self {
        match err {
            MoneyParseError::InvalidFormat(input) => Self::InvalidAmount(input),
            MoneyParseError::OutOfRange(input) => Self::AmountOutOfRange(input),
        }
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
