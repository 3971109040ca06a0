//! Custom error types for cashcast
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for cashcast operations
#[derive(Error, Debug)]
pub enum CashcastError {
    /// A non-positive amount was supplied to an add operation
    #[error("Invalid amount: {0} (must be positive)")]
    InvalidAmount(String),

    /// A recurring transaction day outside [1, 31]
    #[error("Invalid day of month: {0} (must be between 1 and 31)")]
    InvalidDay(u32),

    /// The persisted store is missing, unreadable, or malformed
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV ingestion errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl CashcastError {
    /// Create an `InvalidAmount` error for a money value
    pub fn invalid_amount(amount: impl std::fmt::Display) -> Self {
        Self::InvalidAmount(amount.to_string())
    }

    /// Check if this is a validation error (rejected add operation)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidAmount(_) | Self::InvalidDay(_))
    }

    /// Check if this is a store availability error
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CashcastError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CashcastError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for CashcastError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for cashcast operations
pub type CashcastResult<T> = Result<T, CashcastError>;
