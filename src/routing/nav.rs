//! Navigation projection.
//!
//! Filters the registry down to menu-visible entries and projects them into
//! the minimal shape the navigation chrome consumes. The `show_in_nav` flag
//! is the sole visibility mechanism.

use serde::Serialize;

use crate::routing::registry::RouteRegistry;

/// Display-ready navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Link target path.
    pub to: String,
    /// Menu text.
    pub label: String,
    /// Stable route name.
    pub name: String,
}

impl<V> RouteRegistry<V> {
    /// Menu-visible routes in registration order.
    ///
    /// Entries registered without a label fall back to their name.
    pub fn nav_items(&self) -> Vec<NavItem> {
        self.all()
            .iter()
            .filter(|route| route.show_in_nav())
            .map(|route| NavItem {
                to: route.path().to_string(),
                label: route.label().unwrap_or(route.name()).to_string(),
                name: route.name().to_string(),
            })
            .collect()
    }
}
