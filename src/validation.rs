//! Pure field validation for the contact form.
//!
//! `validate` maps form values to per-field messages and never fails; the
//! caller decides whether an empty result advances the workflow to
//! submission. Patterns are compiled once.

use crate::models::{ContactForm, FormField, ValidationErrors};
use once_cell::sync::Lazy;
use regex::Regex;

/// Local part of word characters, hyphens and dots; one or more
/// dot-separated domain labels; 2-4 letter TLD.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\-.]+@([\w-]+\.)+[\w-]{2,4}$").expect("valid email pattern"));

/// Optional leading + followed by 7-15 digits, checked after stripping
/// internal whitespace.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d{7,15}$").expect("valid phone pattern"));

/// Validate a contact form, returning one message per failing field.
///
/// Pure and deterministic: same input, same output, no side effects.
pub fn validate(form: &ContactForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if form.name.trim().is_empty() {
        errors.insert(FormField::Name, "Name is required");
    }

    if form.email.trim().is_empty() {
        errors.insert(FormField::Email, "Email is required");
    } else if !EMAIL_RE.is_match(&form.email) {
        errors.insert(FormField::Email, "Invalid email");
    }

    // A whitespace-only phone fails the required check, never the pattern.
    if form.phone.trim().is_empty() {
        errors.insert(FormField::Phone, "Phone is required");
    } else {
        let digits: String = form.phone.chars().filter(|c| !c.is_whitespace()).collect();
        if !PHONE_RE.is_match(&digits) {
            errors.insert(FormField::Phone, "Invalid phone");
        }
    }

    if form.message.trim().is_empty() {
        errors.insert(FormField::Message, "Message is required");
    }

    errors
}
