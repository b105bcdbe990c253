//! Content data types.
//!
//! Everything here deserializes from the static JSON data files; nothing is
//! created or mutated at runtime.

use serde::{Deserialize, Serialize};

/// Byline for a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
}

/// One blog post. `slug` is the identity used in `/blog/:slug` links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub category: Option<String>,
    pub excerpt: Option<String>,
    pub image: String,
    pub author: Author,
    pub read_time: String,
    pub date: Option<String>,
    #[serde(default)]
    pub body: Vec<String>,
}

impl BlogPost {
    /// Card-sized excerpt: at most `max` characters, ellipsized beyond that.
    pub fn excerpt_preview(&self, max: usize) -> Option<String> {
        let excerpt = self.excerpt.as_deref()?;
        if excerpt.chars().count() > max {
            let cut: String = excerpt.chars().take(max).collect();
            Some(format!("{cut}..."))
        } else {
            Some(excerpt.to_string())
        }
    }
}

/// A festival partner shown on the pricing and home pages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Partner {
    pub name: String,
    pub kind: String,
    pub blurb: String,
    pub link: Option<String>,
}

/// One ticket tier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    pub price: String,
    pub period: String,
    pub blurb: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
}

/// Ticket tiers plus the full feature list for the comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PricingData {
    pub plans: Vec<PricingPlan>,
    pub features: Vec<String>,
}

impl PricingData {
    /// Whether a plan includes a comparison-table feature.
    pub fn plan_includes(&self, plan: &PricingPlan, feature: &str) -> bool {
        // Tiers are cumulative: "Everything in X" pulls in X's features.
        if plan.features.iter().any(|f| f == feature) {
            return true;
        }
        plan.features
            .iter()
            .filter_map(|f| f.strip_prefix("Everything in "))
            .any(|base_name| {
                self.plans
                    .iter()
                    .find(|p| p.name == base_name)
                    .is_some_and(|base| self.plan_includes(base, feature))
            })
    }
}

/// A listing on the opportunities board.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Opportunity {
    pub title: String,
    pub organization: String,
    pub location: String,
    pub kind: String,
    pub description: String,
    pub link: String,
}
