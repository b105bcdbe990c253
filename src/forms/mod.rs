//! Client-side form handling.
//!
//! # Responsibilities
//! - Field-level validation, collecting every problem at once
//! - Submission logging with a receipt (there is no backend; a submission
//!   is a structured log line plus an id the UI can show)
//!
//! # Design Decisions
//! - Validation never short-circuits: the user sees all field errors together
//! - Invalid forms log nothing
//! - Email checking is a shape check (local part, `@`, dotted domain), not
//!   full RFC 5322

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub mod contact;

pub use contact::ContactForm;

/// Shape check shared by the contact form, the newsletter box, and config
/// validation.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// One field-level validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Ordered collection of field errors for one form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Message for a field, if it failed validation.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|err| err.field == field)
            .map(|err| err.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

/// Proof that a submission was accepted and logged.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub(crate) fn issue() -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }
}
