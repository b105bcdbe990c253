//! Announcement bar model.

use chrono::{DateTime, Utc};

use crate::config::SiteConfig;
use crate::event::Countdown;

/// Display model for the announcement bar across the top of every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub headline: String,
    pub tagline: String,
    /// The urgency line ("~147 days to go – Don't sleep on this!").
    /// Absent once the event has started or when the start time is unset.
    pub days_line: Option<String>,
    pub cta_text: String,
    pub cta_link: String,
}

impl Announcement {
    /// Project the announcement bar from config at a given instant.
    pub fn from_config(config: &SiteConfig, now: DateTime<Utc>) -> Self {
        let days_line = config.event.start_time().ok().and_then(|start| {
            let countdown = Countdown::until(start, now);
            if countdown.is_elapsed() {
                None
            } else {
                Some(format!(
                    "~{} days to go – Don't sleep on this!",
                    countdown.days
                ))
            }
        });

        Self {
            headline: config.announcement.headline.clone(),
            tagline: config.announcement.tagline.clone(),
            days_line,
            cta_text: config.announcement.cta_text.clone(),
            cta_link: config.event.tickets_url.clone(),
        }
    }
}
