//! Contact-form workflow controller.
//!
//! Owns the form, its validation errors, and the workflow status, and
//! orchestrates the submit path: validate, report per-field errors, or
//! send once and land in a terminal display state that returns to idle
//! after a fixed delay. The presentation layer reads status and listens
//! for [`UiSignal`]s; it never drives transitions itself.

use crate::client::AsyncSubmitter;
use crate::models::{ContactForm, FormField, ValidationErrors, WorkflowStatus};
use crate::validation::validate;
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;
use tokio::sync::mpsc;

/// How long a terminal status stays visible before the workflow returns
/// to idle.
pub const STATUS_RESET_DELAY: Duration = Duration::from_millis(3000);

/// UI-observable events emitted by the workflow.
///
/// These are presentation hints, not state: the renderer shakes inputs,
/// flips the form card, and raises toasts in response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiSignal {
    /// An invalid field should shake; emitted once per failing field
    FieldShake(FormField),
    /// The form card flips to the status panel as submission starts
    CardFlip,
    /// "Message sent successfully"
    SuccessToast,
    /// "Error sending message"
    ErrorToast,
}

/// Outcome of a single submit trigger, for callers that care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Ignored: a submission was already in flight or a terminal status
    /// was still displayed
    Rejected,
    /// Validation failed; errors are retained and no request was sent
    Invalid,
    /// Submission succeeded; the form was reset
    Sent,
    /// Submission failed; the form was preserved for retry
    Failed,
}

struct Inner {
    form: ContactForm,
    errors: ValidationErrors,
    status: WorkflowStatus,
    /// Edits received while the form is not editable, applied on the
    /// return to idle.
    pending_edits: Vec<(FormField, String)>,
    /// Bumped on every entry into a terminal status so a stale reset
    /// task can recognize it has been superseded.
    generation: u64,
}

impl Inner {
    fn apply_edit(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
        self.errors.clear(field);
    }
}

/// The contact-form workflow state machine.
///
/// Clone-cheap; clones share state, which is how a renderer and an event
/// handler see the same workflow. At most one submission is in flight at
/// a time: submit triggers outside `Idle` are rejected without a network
/// call.
#[derive(Clone)]
pub struct ContactWorkflow {
    inner: Arc<Mutex<Inner>>,
    submitter: Arc<dyn AsyncSubmitter>,
    signals: mpsc::UnboundedSender<UiSignal>,
    reset_delay: Duration,
}

impl ContactWorkflow {
    /// Create a workflow around a submitter, returning the workflow and
    /// the receiving end of its UI-signal channel.
    pub fn new(
        submitter: Arc<dyn AsyncSubmitter>,
    ) -> (Self, mpsc::UnboundedReceiver<UiSignal>) {
        Self::with_reset_delay(submitter, STATUS_RESET_DELAY)
    }

    /// Create a workflow with a custom terminal-status display time.
    pub fn with_reset_delay(
        submitter: Arc<dyn AsyncSubmitter>,
        reset_delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<UiSignal>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let workflow = Self {
            inner: Arc::new(Mutex::new(Inner {
                form: ContactForm::empty(),
                errors: ValidationErrors::new(),
                status: WorkflowStatus::Idle,
                pending_edits: Vec::new(),
                generation: 0,
            })),
            submitter,
            signals: tx,
            reset_delay,
        };
        (workflow, rx)
    }

    /// Current workflow status.
    pub fn status(&self) -> WorkflowStatus {
        self.inner.lock().unwrap().status
    }

    /// Snapshot of the current form values.
    pub fn form(&self) -> ContactForm {
        self.inner.lock().unwrap().form.clone()
    }

    /// Snapshot of the errors from the last validation pass.
    pub fn errors(&self) -> ValidationErrors {
        self.inner.lock().unwrap().errors.clone()
    }

    /// Message for a single field, if it is currently failing.
    pub fn error_for(&self, field: FormField) -> Option<String> {
        self.inner
            .lock()
            .unwrap()
            .errors
            .get(field)
            .map(str::to_string)
    }

    /// Record a user edit to one field.
    ///
    /// In `Idle` the edit applies immediately and clears that field's
    /// error. While sending or displaying a terminal status the form is
    /// not on screen, so the edit is queued and applied when the
    /// workflow returns to idle; it is never lost and never disturbs an
    /// in-flight submission.
    pub fn edit_field(&self, field: FormField, value: impl Into<String>) {
        let mut inner = self.inner.lock().unwrap();
        let value = value.into();
        match inner.status {
            WorkflowStatus::Idle => inner.apply_edit(field, value),
            _ => inner.pending_edits.push((field, value)),
        }
    }

    /// Handle a submit trigger.
    ///
    /// Runs validation synchronously; on a clean form sends exactly one
    /// request and resolves to a terminal status. Never panics and never
    /// returns an error: every failure mode lands in
    /// [`SubmitOutcome::Failed`] with the form preserved.
    pub async fn submit(&self) -> SubmitOutcome {
        let snapshot = {
            let mut inner = self.inner.lock().unwrap();

            // One submission at a time; a terminal status also holds the
            // form off-screen until the reset fires.
            if inner.status != WorkflowStatus::Idle {
                tracing::debug!(status = ?inner.status, "submit ignored");
                return SubmitOutcome::Rejected;
            }

            inner.errors = validate(&inner.form);
            if !inner.errors.is_empty() {
                for field in inner.errors.fields() {
                    let _ = self.signals.send(UiSignal::FieldShake(field));
                }
                tracing::info!(fields = inner.errors.len(), "validation failed");
                return SubmitOutcome::Invalid;
            }

            inner.status = WorkflowStatus::Sending;
            inner.form.clone()
        };

        let _ = self.signals.send(UiSignal::CardFlip);
        tracing::info!("submitting contact form");

        let result = self.submitter.submit(&snapshot).await;

        let generation = {
            let mut inner = self.inner.lock().unwrap();
            match &result {
                Ok(record) => {
                    tracing::info!(record_id = %record.id, "contact form sent");
                    inner.status = WorkflowStatus::Success;
                    inner.form = ContactForm::empty();
                    let _ = self.signals.send(UiSignal::SuccessToast);
                }
                Err(e) => {
                    // Form values are preserved so the user can retry
                    // without retyping.
                    tracing::error!(error = %e, "contact form submission failed");
                    inner.status = WorkflowStatus::Error;
                    let _ = self.signals.send(UiSignal::ErrorToast);
                }
            }
            inner.generation += 1;
            inner.generation
        };

        self.schedule_reset(generation);

        if result.is_ok() {
            SubmitOutcome::Sent
        } else {
            SubmitOutcome::Failed
        }
    }

    /// Arrange the timed return to idle after a terminal status.
    ///
    /// The task holds only a weak reference: if the workflow is torn
    /// down before the delay elapses, the callback is discarded without
    /// effect. A generation mismatch means a newer terminal state owns
    /// the reset and this task stands down.
    fn schedule_reset(&self, generation: u64) {
        let weak: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
        let delay = self.reset_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let Some(inner) = weak.upgrade() else {
                return;
            };
            let mut inner = inner.lock().unwrap();
            if inner.generation != generation {
                return;
            }
            if matches!(
                inner.status,
                WorkflowStatus::Success | WorkflowStatus::Error
            ) {
                inner.status = WorkflowStatus::Idle;
                let edits = std::mem::take(&mut inner.pending_edits);
                for (field, value) in edits {
                    inner.apply_edit(field, value);
                }
                tracing::debug!("workflow returned to idle");
            }
        });
    }
}
