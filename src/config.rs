//! Configuration management for the submission client.
//!
//! Credentials and identifiers for the record API come exclusively from
//! environment variables (optionally via a .env file); nothing is hardcoded.
//! Missing or malformed values fail fast here so the client never sends a
//! request it knows to be malformed.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default base URL for the Airtable record-creation API.
pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";

/// Configuration for the contact-form submission client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Record API base URL
    pub api_url: String,

    /// Bearer token for authentication
    pub api_token: String,

    /// Identifier of the base holding the contacts table
    pub base_id: String,

    /// Name of the table records are created in
    pub table_name: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Delay before a terminal workflow status returns to idle,
    /// in milliseconds (default: 3000)
    pub status_reset_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `AIRTABLE_API_TOKEN`: Bearer token for the record API
    /// - `AIRTABLE_BASE_ID`: Base identifier
    /// - `AIRTABLE_TABLE_NAME`: Table name for created records
    ///
    /// Optional environment variables:
    /// - `AIRTABLE_API_URL`: API base URL (default: Airtable v0 endpoint)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `STATUS_RESET_MS`: Terminal-status display time in ms (default: 3000)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let api_token = Self::require_var("AIRTABLE_API_TOKEN")?;
        let base_id = Self::require_var("AIRTABLE_BASE_ID")?;
        let table_name = Self::require_var("AIRTABLE_TABLE_NAME")?;

        let api_url = env::var("AIRTABLE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "AIRTABLE_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let status_reset_ms = Self::parse_env_u64("STATUS_RESET_MS", 3000)?;

        Ok(Config {
            api_url,
            api_token,
            base_id,
            table_name,
            request_timeout,
            status_reset_ms,
        })
    }

    /// Read a required environment variable, rejecting blank values.
    fn require_var(var_name: &str) -> ConfigResult<String> {
        let value =
            env::var(var_name).map_err(|_| ConfigError::MissingVar(var_name.to_string()))?;
        if value.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }
        Ok(value)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: String::new(),
            base_id: String::new(),
            table_name: String::new(),
            request_timeout: 10,
            status_reset_ms: 3000,
        }
    }
}
