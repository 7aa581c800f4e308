use async_trait::async_trait;
use contact_workflow::error::{SubmissionError, SubmissionResult};
use contact_workflow::models::{ContactForm, CreatedRecord};
use contact_workflow::AsyncSubmitter;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the mock resolves each submission to.
#[derive(Debug, Clone)]
enum MockResponse {
    Success { record_id: String },
    Failure,
}

/// Mock submitter for workflow testing.
///
/// Resolves to a configured outcome, optionally after a (virtual) delay,
/// and records every form it was asked to send so tests can verify call
/// counts and payloads.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockSubmitter {
    response: Arc<Mutex<MockResponse>>,
    delay: Arc<Mutex<Option<Duration>>>,
    calls: Arc<Mutex<Vec<ContactForm>>>,
}

#[allow(dead_code)]
impl MockSubmitter {
    /// Create a mock that succeeds with record id "rec123".
    pub fn new() -> Self {
        Self {
            response: Arc::new(Mutex::new(MockResponse::Success {
                record_id: "rec123".to_string(),
            })),
            delay: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Configure the mock to succeed with the given record id.
    pub fn succeed_with(&self, record_id: &str) {
        *self.response.lock().unwrap() = MockResponse::Success {
            record_id: record_id.to_string(),
        };
    }

    /// Configure the mock to fail every submission.
    pub fn fail(&self) {
        *self.response.lock().unwrap() = MockResponse::Failure;
    }

    /// Make each submission take this long before resolving.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    /// Number of submissions attempted through this mock.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Every form submitted, in order.
    pub fn submitted_forms(&self) -> Vec<ContactForm> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AsyncSubmitter for MockSubmitter {
    async fn submit(&self, form: &ContactForm) -> SubmissionResult<CreatedRecord> {
        self.calls.lock().unwrap().push(form.clone());

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match self.response.lock().unwrap().clone() {
            MockResponse::Success { record_id } => Ok(CreatedRecord { id: record_id }),
            MockResponse::Failure => Err(SubmissionError::ApiError {
                status: 500,
                message: "Internal error".to_string(),
            }),
        }
    }
}
