//! Data types for the contact-form workflow.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// User input collected by the contact form.
///
/// All four fields are required and must be non-empty after trimming;
/// enforcement lives in [`crate::validation::validate`], not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Create an empty form, the state at workflow start and after a
    /// successful submission.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read a field value by name.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
        }
    }

    /// Overwrite a field value by name.
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Message => self.message = value,
        }
    }
}

/// The four contact-form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

impl FormField {
    /// All fields, in display order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Message,
    ];

    /// Field name as it appears in the submission payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages from the last validation pass.
///
/// A field is present only while it is failing; an empty set means the
/// form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error message for a field, replacing any prior message.
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Drop the error for a field, if any. Used when the user edits it.
    pub fn clear(&mut self, field: FormField) {
        self.errors.remove(&field);
    }

    /// Message for a field, if it is currently failing.
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// True when no field is failing.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failing fields in display order, with their messages.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Failing fields in display order.
    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.errors.keys().copied()
    }
}

/// Success response from the record-creation API.
///
/// Only the opaque record id matters to the workflow; any other response
/// fields are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreatedRecord {
    /// Opaque identifier of the created record
    #[serde(default)]
    pub id: String,
}

/// Workflow status as read by the presentation layer.
///
/// `Sending` covers the whole network wait; `Success` and `Error` are
/// terminal display states that return to `Idle` after a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}
