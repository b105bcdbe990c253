//! Footer model and newsletter signup.
//!
//! # Responsibilities
//! - Project the footer link sections from the route registry
//! - Carry the newsletter box copy and social links from config
//! - Handle newsletter signups (validate, log, receipt)

use crate::config::schema::{NewsletterConfig, SocialConfig};
use crate::config::SiteConfig;
use crate::forms::{is_valid_email, FieldErrors, SubmissionReceipt};
use crate::routing::RouteRegistry;

/// One footer link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLink {
    pub label: String,
    pub to: String,
}

/// A titled column of footer links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<FooterLink>,
}

/// Display model for the site footer.
#[derive(Debug, Clone)]
pub struct Footer {
    pub sections: Vec<FooterSection>,
    pub newsletter: NewsletterConfig,
    pub social: SocialConfig,
    pub copyright: String,
}

impl Footer {
    /// Build the footer from config and the route registry.
    ///
    /// The Explore column mirrors the navigation projection; the Account
    /// column links the auth pages, which never appear in the top nav.
    pub fn build<V>(config: &SiteConfig, registry: &RouteRegistry<V>, year: i32) -> Self {
        let explore = registry
            .nav_items()
            .into_iter()
            .map(|item| FooterLink {
                label: item.label,
                to: item.to,
            })
            .collect();

        let account = vec![
            FooterLink {
                label: "Login".to_string(),
                to: registry.path_for("login").to_string(),
            },
            FooterLink {
                label: "Register".to_string(),
                to: registry.path_for("register").to_string(),
            },
        ];

        Self {
            sections: vec![
                FooterSection {
                    title: "Explore".to_string(),
                    links: explore,
                },
                FooterSection {
                    title: "Account".to_string(),
                    links: account,
                },
            ],
            newsletter: config.newsletter.clone(),
            social: config.social.clone(),
            copyright: format!("© {} {}. All rights reserved.", year, config.site.name),
        }
    }
}

/// Newsletter signup from the footer box.
///
/// Validates the address, logs the signup, and issues a receipt. Like the
/// contact form, the log line is the whole pipeline.
pub fn newsletter_signup(email: &str) -> Result<SubmissionReceipt, FieldErrors> {
    let mut errors = FieldErrors::default();
    if email.trim().is_empty() {
        errors.push("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.push("email", "Please enter a valid email address");
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let receipt = SubmissionReceipt::issue();
    tracing::info!(submission_id = %receipt.id, email = %email, "newsletter signup");
    Ok(receipt)
}
