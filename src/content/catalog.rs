//! The static content catalog.
//!
//! # Responsibilities
//! - Deserialize the bundled JSON data files once at boot
//! - Serve the lookups the pages perform (post by slug, related posts,
//!   ticket tiers, partners, opportunity listings)
//!
//! # Design Decisions
//! - Data is compiled into the binary with `include_str!`; there is no
//!   runtime fetch and no persistence
//! - Read-only after construction, like the route registry
//! - Tests can inject their own JSON via [`ContentCatalog::from_sources`]

use thiserror::Error;

use crate::content::model::{BlogPost, Opportunity, Partner, PricingData};

const BLOG_JSON: &str = include_str!("../../data/blog.json");
const PARTNERS_JSON: &str = include_str!("../../data/partners.json");
const PRICING_JSON: &str = include_str!("../../data/pricing.json");
const OPPORTUNITIES_JSON: &str = include_str!("../../data/opportunities.json");

/// Error type for catalog construction.
#[derive(Debug, Error)]
#[error("malformed {file} data: {source}")]
pub struct ContentError {
    pub file: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// All static content, loaded once and read everywhere.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    posts: Vec<BlogPost>,
    partners: Vec<Partner>,
    pricing: PricingData,
    opportunities: Vec<Opportunity>,
}

impl ContentCatalog {
    /// Load the catalog from the bundled data files.
    pub fn load_default() -> Result<Self, ContentError> {
        Self::from_sources(BLOG_JSON, PARTNERS_JSON, PRICING_JSON, OPPORTUNITIES_JSON)
    }

    /// Build a catalog from caller-supplied JSON documents.
    pub fn from_sources(
        blog: &str,
        partners: &str,
        pricing: &str,
        opportunities: &str,
    ) -> Result<Self, ContentError> {
        Ok(Self {
            posts: parse("blog", blog)?,
            partners: parse("partners", partners)?,
            pricing: parse("pricing", pricing)?,
            opportunities: parse("opportunities", opportunities)?,
        })
    }

    /// All posts, newest first as authored in the data file.
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// The post behind `/blog/:slug`, if the slug exists.
    pub fn post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    /// Up to `limit` other posts for the related-reading strip, in catalog
    /// order, never including the post itself.
    pub fn related_posts(&self, slug: &str, limit: usize) -> Vec<&BlogPost> {
        self.posts
            .iter()
            .filter(|post| post.slug != slug)
            .take(limit)
            .collect()
    }

    pub fn partners(&self) -> &[Partner] {
        &self.partners
    }

    pub fn pricing(&self) -> &PricingData {
        &self.pricing
    }

    pub fn opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }
}

fn parse<T: serde::de::DeserializeOwned>(file: &'static str, json: &str) -> Result<T, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError { file, source })
}
