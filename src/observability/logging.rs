//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem
//! - Configure log level via environment
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Level defaults to `cuzinfest_site=info`, overridable via `RUST_LOG`
//! - Form submissions and newsletter signups are log lines, not stored
//!   records; this module is their only sink

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Call once, at process start.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cuzinfest_site=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
