//! Error types for the parameter store.

use thiserror::Error;

/// Top-level error type for fallible parameter store operations.
///
/// Derivations (totals, grouping) never produce errors; these variants
/// only surface at input and configuration boundaries.
#[derive(Error, Debug)]
pub enum ParamError {
    /// A species slot index outside the fixed slot range.
    #[error("Species slot out of range: {slot} (slots: {slots})")]
    SlotOutOfRange {
        /// Requested slot index.
        slot: usize,
        /// Number of available slots.
        slots: usize,
    },

    /// Numeric text rejected under the strict input policy.
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber {
        /// Which field received the input.
        field: String,
        /// The rejected raw text.
        value: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization or deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, ParamError>;
