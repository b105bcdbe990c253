//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check link fields actually parse as URLs
//! - Check the event start timestamp parses as RFC 3339
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::SiteConfig;
use crate::forms::is_valid_email;

/// A single semantic problem found in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("site.name must not be empty")]
    EmptySiteName,

    #[error("event.title must not be empty")]
    EmptyEventTitle,

    #[error("event.starts_at `{value}` is not a valid RFC 3339 timestamp")]
    BadEventStart { value: String },

    #[error("{field} `{value}` is not a valid URL")]
    BadUrl { field: &'static str, value: String },

    #[error("contact.email `{0}` is not a valid email address")]
    BadEmail(String),
}

/// Validate a parsed config, collecting every problem found.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.site.name.trim().is_empty() {
        errors.push(ValidationError::EmptySiteName);
    }
    if config.event.title.trim().is_empty() {
        errors.push(ValidationError::EmptyEventTitle);
    }
    if config.event.start_time().is_err() {
        errors.push(ValidationError::BadEventStart {
            value: config.event.starts_at.clone(),
        });
    }

    check_link(&mut errors, "event.tickets_url", &config.event.tickets_url);
    check_link(&mut errors, "social.facebook", &config.social.facebook);
    check_link(&mut errors, "social.instagram", &config.social.instagram);
    check_link(&mut errors, "social.linkedin", &config.social.linkedin);

    if !is_valid_email(&config.contact.email) {
        errors.push(ValidationError::BadEmail(config.contact.email.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Links may be site-relative (`/tickets`) or absolute URLs.
fn check_link(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.starts_with('/') {
        return;
    }
    if Url::parse(value).is_err() {
        errors.push(ValidationError::BadUrl {
            field,
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&SiteConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = SiteConfig::default();
        config.site.name = "  ".to_string();
        config.event.starts_at = "16 June 2026".to_string();
        config.social.facebook = "not a url".to_string();
        config.contact.email = "nobody".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::EmptySiteName));
        assert!(errors.contains(&ValidationError::BadEmail("nobody".into())));
    }

    #[test]
    fn test_relative_ticket_link_is_allowed() {
        let mut config = SiteConfig::default();
        config.event.tickets_url = "/tickets".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
