//! Async wrapper around the synchronous AirtableClient.
//!
//! Uses `tokio::task::spawn_blocking` to run the HTTP call on a dedicated
//! thread pool so the submission does not block the async runtime. The
//! workflow controller depends on the trait, which lets tests substitute a
//! mock submitter.

use crate::client::AirtableClient;
use crate::error::{SubmissionError, SubmissionResult};
use crate::models::{ContactForm, CreatedRecord};
use async_trait::async_trait;
use std::sync::Arc;

/// Async submission seam used by the workflow controller.
#[async_trait]
pub trait AsyncSubmitter: Send + Sync {
    /// Submit the form, resolving to the created record or a uniform failure.
    async fn submit(&self, form: &ContactForm) -> SubmissionResult<CreatedRecord>;
}

/// Async wrapper around the synchronous AirtableClient.
#[derive(Clone)]
pub struct AsyncAirtableClient {
    client: Arc<AirtableClient>,
}

impl AsyncAirtableClient {
    pub fn new(client: AirtableClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncSubmitter for AsyncAirtableClient {
    async fn submit(&self, form: &ContactForm) -> SubmissionResult<CreatedRecord> {
        let client = self.client.clone();
        let form = form.clone();

        tokio::task::spawn_blocking(move || client.create_record(&form))
            .await
            .map_err(|e| SubmissionError::HttpError(format!("Task join error: {}", e)))?
    }
}
