//! Error types for the contact-form workflow.
//!
//! This module defines custom error types using `thiserror`. The workflow
//! treats every `SubmissionError` variant uniformly as a failed submission;
//! the variants exist for logging and tests, not for caller branching.

use thiserror::Error;

/// Errors that can occur while submitting a form to the record API.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// HTTP transport failed before a response arrived
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned a non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Response decoded but carried no created-record identifier
    #[error("Response missing created record id")]
    MissingRecordId,

    /// Submission credentials or identifiers were not configured
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SubmissionError
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
