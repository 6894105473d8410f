//! Error types for the form layer.

use thiserror::Error;
use vdyp_params_core::ParamError;

/// Errors raised while applying form input.
#[derive(Error, Debug)]
pub enum FormError {
    /// The store rejected the edit.
    #[error(transparent)]
    Params(#[from] ParamError),

    /// Form configuration could not be loaded.
    #[error("Form configuration error: {0}")]
    Config(String),

    /// The log subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, FormError>;
