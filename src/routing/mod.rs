//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Registration (at boot):
//!     (path, view, name, label, show_in_nav)[]
//!     → pattern.rs (parse templates into segments)
//!     → registry.rs (ordered, immutable table)
//!
//! Link Generation (at render):
//!     route name (+ params)
//!     → resolver.rs (path_for / resolve / resolve_strict)
//!     → concrete path for the chrome to link to
//!
//! Menu Rendering:
//!     registry → nav.rs (filter show_in_nav, project to {to, label, name})
//!
//! Page Dispatch:
//!     concrete path → registry.find_match → (descriptor, captured params)
//! ```
//!
//! # Design Decisions
//! - Templates parsed at registration, table immutable at runtime
//! - Deterministic: same input always yields the same route
//! - First match wins, in registration order
//! - Unknown names degrade to `/` in the lenient resolver; the strict
//!   resolver reports them

pub mod nav;
pub mod pattern;
pub mod registry;
pub mod resolver;

pub use nav::NavItem;
pub use pattern::{PathParams, PathPattern, PatternError, Segment};
pub use registry::{RegistryBuilder, RouteDescriptor, RouteRegistry};
pub use resolver::{ResolveError, FALLBACK_PATH};
