//! HTTP client for the external record-creation API.
//!
//! This module provides a synchronous client used from async contexts via
//! `tokio::task::spawn_blocking`. The client handles bearer authentication,
//! error mapping, and the success contract: a submission only counts as
//! sent when the response decodes and carries a non-empty record id.

mod async_wrapper;
pub use async_wrapper::{AsyncAirtableClient, AsyncSubmitter};

use crate::config::Config;
use crate::error::{SubmissionError, SubmissionResult};
use crate::models::{ContactForm, CreatedRecord};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Client for creating records in a base/table-scoped tabular API.
///
/// One submission is one POST; there is no retry policy and no timeout
/// beyond the agent's transport default.
#[derive(Clone)]
pub struct AirtableClient {
    /// API base URL
    api_url: String,

    /// Bearer token for authentication
    api_token: String,

    /// Base identifier
    base_id: String,

    /// Table name for created records
    table_name: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl AirtableClient {
    /// Create a new AirtableClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            api_url: config.api_url.clone(),
            api_token: config.api_token.clone(),
            base_id: config.base_id.clone(),
            table_name: config.table_name.clone(),
            agent: Arc::new(agent),
        }
    }

    /// Create a client with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(
        api_url: String,
        api_token: String,
        base_id: String,
        table_name: String,
    ) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            api_url,
            api_token,
            base_id,
            table_name,
            agent: Arc::new(agent),
        }
    }

    /// Full URL of the record-creation endpoint.
    fn record_url(&self) -> String {
        let base = self.api_url.trim_end_matches('/');
        format!("{}/{}/{}", base, self.base_id, self.table_name)
    }

    /// Submit the form as a new record.
    ///
    /// Sends `{"fields": {...}}` with the four field values and returns the
    /// created record on success. Every failure mode (transport, non-2xx,
    /// malformed body, missing id) surfaces as a `SubmissionError`; callers
    /// treat them uniformly.
    pub fn create_record(&self, form: &ContactForm) -> SubmissionResult<CreatedRecord> {
        let url = self.record_url();
        let body = json!({
            "fields": {
                "name": form.name,
                "email": form.email,
                "phone": form.phone,
                "message": form.message,
            }
        });

        tracing::debug!("POST {}", url);

        let response = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_token))
            .set("Content-Type", "application/json")
            .send_json(&body)
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        let body = response
            .into_string()
            .map_err(|e| SubmissionError::HttpError(e.to_string()))?;

        let record: CreatedRecord =
            serde_json::from_str(&body).map_err(SubmissionError::JsonError)?;

        if record.id.is_empty() {
            tracing::error!("record API returned {} without a record id", status);
            return Err(SubmissionError::MissingRecordId);
        }

        tracing::debug!("created record {}", record.id);
        Ok(record)
    }

    /// Map a ureq error to a SubmissionError.
    fn map_error(&self, error: ureq::Error) -> SubmissionError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 | 403 => SubmissionError::Unauthorized,
                    _ => SubmissionError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    SubmissionError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    SubmissionError::Timeout
                } else {
                    SubmissionError::HttpError(transport.to_string())
                }
            }
        }
    }
}
