//! Countdown to the festival start.

use chrono::{DateTime, TimeDelta, TimeZone};
use serde::Serialize;

/// Time remaining until a target instant, split for display.
///
/// All cells saturate to zero once the target has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Remaining time from `now` to `target`. The two instants may carry
    /// different timezones.
    pub fn until<Tz1: TimeZone, Tz2: TimeZone>(
        target: DateTime<Tz1>,
        now: DateTime<Tz2>,
    ) -> Self {
        let delta = target.signed_duration_since(now);
        if delta <= TimeDelta::zero() {
            return Self {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0,
            };
        }

        Self {
            days: delta.num_days(),
            hours: delta.num_hours() % 24,
            minutes: delta.num_minutes() % 60,
            seconds: delta.num_seconds() % 60,
        }
    }

    /// True once every cell has reached zero.
    pub fn is_elapsed(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
