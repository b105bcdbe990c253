//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site.
//! All types derive Serde traits for deserialization from config files.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Root configuration for the site kernel.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Site identity (name, description, version).
    pub site: SiteInfo,

    /// The festival edition being promoted.
    pub event: EventConfig,

    /// Social profile links rendered in chrome.
    pub social: SocialConfig,

    /// Support contact details.
    pub contact: ContactConfig,

    /// Announcement bar copy.
    pub announcement: AnnouncementConfig,

    /// Footer newsletter box copy.
    pub newsletter: NewsletterConfig,
}

/// Site identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteInfo {
    /// Display name used in titles and the copyright line.
    pub name: String,

    /// One-line site description.
    pub description: String,

    /// Content version, surfaced in boot logs only.
    pub version: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "CuzinFest".to_string(),
            description: "Family. Business. Future.".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

/// The promoted event edition.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EventConfig {
    /// Edition title (e.g. "CuzinFest 2026").
    pub title: String,

    /// Venue shown in chrome copy.
    pub venue: String,

    /// Event start as an RFC 3339 timestamp. Kept as text in config;
    /// parsed on use via [`EventConfig::start_time`].
    pub starts_at: String,

    /// Ticket link, site-relative or absolute.
    pub tickets_url: String,
}

impl EventConfig {
    /// Parse the configured start timestamp.
    pub fn start_time(&self) -> chrono::ParseResult<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.starts_at)
    }
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            title: "CuzinFest 2026".to_string(),
            venue: "Mahikeng".to_string(),
            // 09:00 SAST on festival day.
            starts_at: "2026-06-16T09:00:00+02:00".to_string(),
            tickets_url: "/tickets".to_string(),
        }
    }
}

/// Social profile links.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SocialConfig {
    pub facebook: String,
    pub instagram: String,
    pub linkedin: String,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            facebook: "https://facebook.com/cuzinfest".to_string(),
            instagram: "https://instagram.com/cuzinfest".to_string(),
            linkedin: "https://linkedin.com/company/cuzinfest".to_string(),
        }
    }
}

/// Support contact details.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "support@cuzinfest.com".to_string(),
            phone: "1-800-CUZIN-99".to_string(),
        }
    }
}

/// Announcement bar copy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnnouncementConfig {
    /// Leading line (edition, date, venue).
    pub headline: String,

    /// Secondary line.
    pub tagline: String,

    /// Ticket call-to-action text.
    pub cta_text: String,
}

impl Default for AnnouncementConfig {
    fn default() -> Self {
        Self {
            headline: "CuzinFest 2026 – 16 June | Mhk".to_string(),
            tagline: "Family • Business • Vibes • Good Food".to_string(),
            cta_text: "Grab Early Bird Tickets".to_string(),
        }
    }
}

/// Footer newsletter box copy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NewsletterConfig {
    pub title: String,
    pub description: String,
    pub placeholder: String,
    pub button_text: String,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            title: "Your Source for CuzinFest Updates".to_string(),
            description: "Stay in the loop with the family newsletter: lineup drops, \
                          opportunity listings, and early bird windows."
                .to_string(),
            placeholder: "Your e-mail...".to_string(),
            button_text: "Get in touch".to_string(),
        }
    }
}
