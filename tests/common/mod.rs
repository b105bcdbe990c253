//! Shared utilities for integration testing.

use cuzinfest_site::routing::{RegistryBuilder, RouteRegistry};
use cuzinfest_site::{Site, SiteConfig};

/// Boot the stock site.
pub fn boot_site() -> Site {
    Site::boot(SiteConfig::default()).expect("stock site boots")
}

/// A small registry mirroring the site's shape, with unit views so tests
/// can register arbitrary entries.
#[allow(dead_code)]
pub fn sample_registry() -> RouteRegistry<()> {
    let mut builder = RegistryBuilder::new();
    builder.register("/", (), "home", Some("Home"), false);
    builder.register("/about", (), "about", Some("About"), true);
    builder.register("/pricing", (), "pricing", Some("Pricing"), true);
    builder.register("/blog", (), "blog", Some("Blog"), false);
    builder.register("/blog/:slug", (), "blog-single", None, false);
    builder.register("/contact", (), "contact", Some("Contact"), true);
    builder.build()
}
