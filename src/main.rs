//! CuzinFest Site Kernel (v1)
//!
//! Application kernel for the CuzinFest event-promotion site.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────────┐
//!                    │                  SITE KERNEL                      │
//!                    │                                                   │
//!   config file      │  ┌─────────┐     ┌──────────────┐                │
//!   ────────────────►│  │ config  │────►│   Site::boot │                │
//!                    │  │ loader  │     └──────┬───────┘                │
//!                    │  └─────────┘            │                        │
//!                    │                ┌────────┴─────────┐              │
//!                    │                ▼                  ▼              │
//!                    │        ┌──────────────┐   ┌──────────────┐       │
//!                    │        │   routing    │   │   content    │       │
//!                    │        │   registry   │   │   catalog    │       │
//!                    │        └──────┬───────┘   └──────┬───────┘       │
//!                    │               │                  │               │
//!   navigation       │               ▼                  ▼               │
//!   ────────────────►│        resolver / nav     page lookups           │
//!                    │               │                  │               │
//!                    │               ▼                  ▼               │
//!                    │  ┌────────────────────────────────────────────┐  │
//!                    │  │  chrome (announcement, menu, cta, footer)  │  │
//!                    │  │  event (countdown, slideshow)  forms       │  │
//!                    │  └────────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────────┘
//! ```
//!
//! Running the binary boots the kernel and reports what the chrome would
//! render: the navigation projection, the announcement bar, and the
//! countdown. The rendering host itself is out of scope.

use std::path::Path;

use chrono::Utc;

use cuzinfest_site::config::{load_config, SiteConfig};
use cuzinfest_site::observability;
use cuzinfest_site::Site;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init();

    tracing::info!("cuzinfest-site v0.1.0 starting");

    // Load configuration; the stock site boots with no config file.
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => SiteConfig::default(),
    };

    tracing::info!(
        site = %config.site.name,
        event = %config.event.title,
        venue = %config.event.venue,
        "Configuration loaded"
    );

    let site = Site::boot(config)?;

    let nav: Vec<_> = site
        .registry()
        .nav_items()
        .into_iter()
        .map(|item| item.label)
        .collect();
    tracing::info!(nav = %nav.join(" | "), "navigation projection");

    let announcement = site.announcement(Utc::now());
    match &announcement.days_line {
        Some(line) => tracing::info!(headline = %announcement.headline, %line, "announcement bar"),
        None => tracing::info!(headline = %announcement.headline, "announcement bar (event started)"),
    }

    // Prove dispatch end to end: navigate home and resolve its view.
    match site.render("/") {
        Some((view, _)) => tracing::info!(title = %view.document_title, "home rendered"),
        None => tracing::error!("home route missing from registry"),
    }

    tracing::info!("Boot check complete");
    Ok(())
}
