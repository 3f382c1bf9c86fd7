//! Error types for the contact form demo.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//!
//! Field-level validation failures are not represented here: they are part of
//! the normal request/response flow and travel as [`crate::models::FieldErrors`].

use thiserror::Error;

/// Errors that can occur when submitting the form over HTTP.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Endpoint returned a status error without a structured body
    #[error("Unexpected response (status {status}): {message}")]
    UnexpectedResponse { status: u16, message: String },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
