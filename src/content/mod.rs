//! Static content subsystem.
//!
//! # Data Flow
//! ```text
//! data/*.json (bundled at compile time)
//!     → catalog.rs (deserialize once at boot)
//!     → ContentCatalog (read-only)
//!     → page views look up posts / plans / partners / opportunities
//! ```

pub mod catalog;
pub mod model;

pub use catalog::{ContentCatalog, ContentError};
pub use model::{Author, BlogPost, Opportunity, Partner, PricingData, PricingPlan};
