//! The contact page form.

use serde::{Deserialize, Serialize};

use crate::forms::{is_valid_email, FieldErrors, SubmissionReceipt};

/// Contact form state as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    /// Optional; no validation applies.
    pub company: String,
    /// Which service the enquiry is about (vendor stand, pitch slot, ...).
    pub service: String,
}

impl ContactForm {
    /// Check every field, returning all problems at once.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.full_name.trim().is_empty() {
            errors.push("full_name", "Full Name is required");
        }

        if self.email.trim().is_empty() {
            errors.push("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.push("email", "Please enter a valid email address");
        }

        if self.service.is_empty() {
            errors.push("service", "Please select a service");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and, if clean, log the submission and issue a receipt.
    ///
    /// There is no backend; the structured log line is the whole submission
    /// pipeline. Invalid forms return their field errors and log nothing.
    pub fn submit(&self) -> Result<SubmissionReceipt, FieldErrors> {
        self.validate()?;

        let receipt = SubmissionReceipt::issue();
        tracing::info!(
            submission_id = %receipt.id,
            full_name = %self.full_name,
            email = %self.email,
            company = %self.company,
            service = %self.service,
            "contact form submitted"
        );
        Ok(receipt)
    }

    /// Reset to the blank state after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            full_name: "Tumi Mokoena".to_string(),
            email: "tumi@cuzinfest.com".to_string(),
            company: String::new(),
            service: "vendor-stand".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn test_empty_form_collects_all_errors() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("full_name"), Some("Full Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("service"), Some("Please select a service"));
    }

    #[test]
    fn test_malformed_email_message() {
        let mut form = filled_form();
        form.email = "not-an-email".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("email"),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_company_is_optional() {
        let mut form = filled_form();
        form.company = String::new();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_submit_issues_receipt_and_reset_clears() {
        let mut form = filled_form();
        let receipt = form.submit().unwrap();
        assert!(!receipt.id.is_nil());

        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_invalid_submit_returns_errors() {
        assert!(ContactForm::default().submit().is_err());
    }
}
