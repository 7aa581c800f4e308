//! Contact-form validation and submission workflow.
//!
//! This library implements the contact section of the consulting site as a
//! testable core, free of any DOM or rendering concern: the presentation
//! layer passes field edits and submit triggers in, and reads workflow
//! status and UI signals out.
//!
//! # Architecture
//!
//! - **models**: form values, per-field errors, workflow status
//! - **validation**: pure per-field validator
//! - **config**: submission credentials from environment variables
//! - **client**: record-creation API client (sync + async seam)
//! - **workflow**: the idle/sending/success/error state machine
//! - **error**: custom error types for precise error handling

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
pub mod workflow;

pub use client::{AirtableClient, AsyncAirtableClient, AsyncSubmitter};
pub use config::Config;
pub use error::{ConfigError, SubmissionError};
pub use models::{ContactForm, CreatedRecord, FormField, ValidationErrors, WorkflowStatus};
pub use validation::validate;
pub use workflow::{ContactWorkflow, SubmitOutcome, UiSignal, STATUS_RESET_DELAY};
