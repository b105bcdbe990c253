//! Route registry construction and lookup.
//!
//! # Responsibilities
//! - Store route descriptors in registration order
//! - Look up descriptors by name or by concrete path
//! - Hand the full ordered table to the dispatch collaborator
//!
//! # Design Decisions
//! - Built once at boot via [`RegistryBuilder`], immutable afterwards
//!   (thread-safe without locks)
//! - Generic over the view handle type; the registry never resolves a view
//! - `name` and `path` uniqueness is the registrar's responsibility;
//!   duplicates are not detected and the first match wins
//! - O(n) scans are fine for a table this size

use crate::routing::pattern::{PathParams, PathPattern};

/// One registered route: a path template bound to a named, displayable view.
///
/// Immutable value constructed once at startup.
#[derive(Debug, Clone)]
pub struct RouteDescriptor<V> {
    pattern: PathPattern,
    name: String,
    label: Option<String>,
    show_in_nav: bool,
    view: V,
}

impl<V> RouteDescriptor<V> {
    /// The path template exactly as registered.
    pub fn path(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// Stable internal identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable menu text, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether this entry appears in generated navigation menus.
    pub fn show_in_nav(&self) -> bool {
        self.show_in_nav
    }

    /// The opaque deferred view handle. Resolving it is the rendering
    /// collaborator's concern, never the registry's.
    pub fn view(&self) -> &V {
        &self.view
    }
}

/// Collects route registrations before the table is frozen.
#[derive(Debug)]
pub struct RegistryBuilder<V> {
    routes: Vec<RouteDescriptor<V>>,
}

impl<V> RegistryBuilder<V> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Construct and append a descriptor.
    ///
    /// The caller guarantees `path` and `name` uniqueness; a duplicate is a
    /// registration mistake, not a handled failure, and lookups will keep
    /// returning the earlier entry.
    pub fn register(
        &mut self,
        path: &str,
        view: V,
        name: impl Into<String>,
        label: Option<&str>,
        show_in_nav: bool,
    ) -> &RouteDescriptor<V> {
        self.routes.push(RouteDescriptor {
            pattern: PathPattern::parse(path),
            name: name.into(),
            label: label.map(str::to_string),
            show_in_nav,
            view,
        });
        let idx = self.routes.len() - 1;
        &self.routes[idx]
    }

    /// Freeze the table. No entry can be added, removed, or mutated after
    /// this point.
    pub fn build(self) -> RouteRegistry<V> {
        RouteRegistry {
            routes: self.routes,
        }
    }
}

impl<V> Default for RegistryBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// The authoritative, ordered route table.
#[derive(Debug, Clone)]
pub struct RouteRegistry<V> {
    routes: Vec<RouteDescriptor<V>>,
}

impl<V> RouteRegistry<V> {
    /// The full registry in registration order, for the routing collaborator.
    pub fn all(&self) -> &[RouteDescriptor<V>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// First descriptor registered under `name`, if any.
    pub fn find_by_name(&self, name: &str) -> Option<&RouteDescriptor<V>> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// First descriptor whose template matches the concrete `path`, with the
    /// captured parameters. This is the lookup the page dispatcher uses.
    pub fn find_match(&self, path: &str) -> Option<(&RouteDescriptor<V>, PathParams)> {
        self.routes
            .iter()
            .find_map(|route| route.pattern.matches(path).map(|params| (route, params)))
    }
}
