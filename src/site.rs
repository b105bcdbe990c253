//! Site kernel: boot-time wiring.
//!
//! # Data Flow
//! ```text
//! SiteConfig (validated)
//!     → Site::boot
//!         → default_routes() builds the immutable route registry
//!         → ContentCatalog::load_default() parses the bundled data
//!     → chrome and pages read the Site handle; nothing mutates it
//!
//! Navigation:
//!     concrete path → Site::render → registry.find_match
//!         → LazyView resolved on first visit → PageView
//! ```
//!
//! # Design Decisions
//! - The registry handle is an explicit value owned by `Site` and injected
//!   into consumers; there is no process-global table, so every test can
//!   boot its own kernel
//! - Views are deferred: a route holds a loader function and resolves it at
//!   most once, on first navigation

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::chrome::Announcement;
use crate::config::SiteConfig;
use crate::content::{ContentCatalog, ContentError};
use crate::routing::{PathParams, RegistryBuilder, RouteDescriptor, RouteRegistry};

/// Which page a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    Home,
    About,
    Pricing,
    Blog,
    BlogSingle,
    Contact,
    Login,
    Register,
    Opportunities,
}

/// The renderable unit behind a route.
///
/// Markup is out of scope; a view is the page identity plus the document
/// title the host sets on navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub kind: PageKind,
    pub document_title: String,
}

impl PageView {
    fn new(kind: PageKind, document_title: &str) -> Self {
        Self {
            kind,
            document_title: document_title.to_string(),
        }
    }
}

/// Deferred view handle.
///
/// Holds a loader and resolves it at most once, on first access. The
/// registry only stores the handle; resolution happens in [`Site::render`],
/// never during registration or lookup.
#[derive(Debug)]
pub struct LazyView<T> {
    loader: fn() -> T,
    cell: OnceLock<T>,
}

impl<T> LazyView<T> {
    pub fn new(loader: fn() -> T) -> Self {
        Self {
            loader,
            cell: OnceLock::new(),
        }
    }

    /// Resolve on first call; cheap reads afterwards.
    pub fn get(&self) -> &T {
        self.cell.get_or_init(self.loader)
    }

    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T: Clone> Clone for LazyView<T> {
    fn clone(&self) -> Self {
        // Clones start unresolved; the loader re-runs on first use.
        Self::new(self.loader)
    }
}

/// The concrete registry type the site uses.
pub type SiteRegistry = RouteRegistry<LazyView<PageView>>;

/// Everything the chrome and pages read: config, routes, content.
///
/// Built once at startup and read-only for the rest of the process.
#[derive(Debug)]
pub struct Site {
    config: SiteConfig,
    registry: SiteRegistry,
    catalog: ContentCatalog,
}

impl Site {
    /// Construct the kernel: build the route table and load the catalog.
    pub fn boot(config: SiteConfig) -> Result<Self, ContentError> {
        let registry = default_routes();
        let catalog = ContentCatalog::load_default()?;

        tracing::info!(
            site = %config.site.name,
            routes = registry.len(),
            posts = catalog.posts().len(),
            opportunities = catalog.opportunities().len(),
            "site kernel booted"
        );

        Ok(Self {
            config,
            registry,
            catalog,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn registry(&self) -> &SiteRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Announcement bar contents at a given instant.
    pub fn announcement(&self, now: DateTime<Utc>) -> Announcement {
        Announcement::from_config(&self.config, now)
    }

    /// Match a concrete path against the registry without touching the view.
    pub fn dispatch(&self, path: &str) -> Option<(&RouteDescriptor<LazyView<PageView>>, PathParams)> {
        self.registry.find_match(path)
    }

    /// Navigate: match the path and resolve its view (loading it on the
    /// first visit).
    pub fn render(&self, path: &str) -> Option<(&PageView, PathParams)> {
        let (route, params) = self.dispatch(path)?;
        let view = route.view().get();
        tracing::debug!(path, route = route.name(), page = ?view.kind, "rendered");
        Some((view, params))
    }
}

/// The route table, registered exactly as the site declares it.
fn default_routes() -> SiteRegistry {
    let mut builder = RegistryBuilder::new();
    builder.register("/", LazyView::new(home_page), "home", Some("Home"), false);
    builder.register("/about", LazyView::new(about_page), "about", Some("About"), true);
    // The pricing page is branded "Community" in the nav.
    builder.register(
        "/pricing",
        LazyView::new(pricing_page),
        "Community",
        Some("Community"),
        true,
    );
    builder.register("/blog", LazyView::new(blog_page), "blog", Some("Blog"), false);
    builder.register(
        "/blog/:slug",
        LazyView::new(blog_single_page),
        "blog-single",
        None,
        false,
    );
    builder.register(
        "/contact",
        LazyView::new(contact_page),
        "contact",
        Some("Contact"),
        true,
    );
    builder.register("/login", LazyView::new(login_page), "login", Some("Login"), false);
    builder.register(
        "/register",
        LazyView::new(register_page),
        "register",
        Some("Register"),
        false,
    );
    builder.register(
        "/opportunities",
        LazyView::new(opportunities_page),
        "opportunities",
        Some("Opportunities"),
        false,
    );
    builder.build()
}

fn home_page() -> PageView {
    PageView::new(PageKind::Home, "CuzinFest - Family. Business. Future.")
}

fn about_page() -> PageView {
    PageView::new(PageKind::About, "About - CuzinFest")
}

fn pricing_page() -> PageView {
    PageView::new(PageKind::Pricing, "Community - CuzinFest")
}

fn blog_page() -> PageView {
    PageView::new(PageKind::Blog, "Blog - CuzinFest")
}

fn blog_single_page() -> PageView {
    // The host swaps in the post title once the slug is looked up.
    PageView::new(PageKind::BlogSingle, "Blog - CuzinFest")
}

fn contact_page() -> PageView {
    PageView::new(PageKind::Contact, "Contact - CuzinFest")
}

fn login_page() -> PageView {
    PageView::new(PageKind::Login, "Login - CuzinFest")
}

fn register_page() -> PageView {
    PageView::new(PageKind::Register, "Register - CuzinFest")
}

fn opportunities_page() -> PageView {
    PageView::new(PageKind::Opportunities, "Opportunities - CuzinFest")
}
