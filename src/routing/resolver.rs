//! Name-to-path resolution.
//!
//! # Responsibilities
//! - Map a stable route name to its navigable path
//! - Substitute `:param` placeholders at link-generation time
//!
//! # Design Decisions
//! - Unmatched names fall back to `/` rather than failing, so link
//!   generation can never panic inside a render path; callers that must
//!   distinguish "not found" from "is root" check [`RouteRegistry::find_by_name`]
//! - The lenient [`resolve`] keeps the historical text-substitution
//!   semantics: missing parameters stay in the output as `:name`
//! - [`resolve_strict`] is the loud variant for new call sites: unknown
//!   names and parameter mismatches are errors
//!
//! [`resolve`]: RouteRegistry::resolve
//! [`resolve_strict`]: RouteRegistry::resolve_strict
//! [`RouteRegistry::find_by_name`]: crate::routing::RouteRegistry::find_by_name

use thiserror::Error;

use crate::routing::pattern::PatternError;
use crate::routing::registry::RouteRegistry;

/// Path returned for names that resolve to nothing.
pub const FALLBACK_PATH: &str = "/";

/// Errors from strict resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No registry entry carries this name.
    #[error("unknown route name `{0}`")]
    UnknownName(String),

    /// The route's template has a parameter the caller did not supply.
    #[error("route `{route}`: missing value for parameter `:{param}`")]
    MissingParam { route: String, param: String },

    /// The caller supplied a parameter the route's template does not use.
    #[error("route `{route}`: parameter `{param}` does not appear in the path")]
    UnusedParam { route: String, param: String },
}

impl<V> RouteRegistry<V> {
    /// Path template of the first entry named `name`, or [`FALLBACK_PATH`]
    /// when no entry matches.
    pub fn path_for(&self, name: &str) -> &str {
        self.find_by_name(name)
            .map(|route| route.path())
            .unwrap_or(FALLBACK_PATH)
    }

    /// [`path_for`] followed by lenient placeholder substitution.
    ///
    /// For each `(key, value)` pair, in order, the first literal `:key`
    /// token is replaced with `value`. Keys without a matching placeholder
    /// are ignored, and placeholders without a supplied value remain in the
    /// output verbatim.
    ///
    /// [`path_for`]: RouteRegistry::path_for
    pub fn resolve(&self, name: &str, params: &[(&str, &str)]) -> String {
        match self.find_by_name(name) {
            Some(route) => route.pattern().render(params),
            // The fallback path has no placeholders, so substitution is a no-op.
            None => FALLBACK_PATH.to_string(),
        }
    }

    /// Resolution that fails loudly on an unknown name or a parameter
    /// mismatch in either direction.
    pub fn resolve_strict(&self, name: &str, params: &[(&str, &str)]) -> Result<String, ResolveError> {
        let route = self
            .find_by_name(name)
            .ok_or_else(|| ResolveError::UnknownName(name.to_string()))?;

        route
            .pattern()
            .render_strict(params)
            .map_err(|err| match err {
                PatternError::MissingParam(param) => ResolveError::MissingParam {
                    route: name.to_string(),
                    param,
                },
                PatternError::UnusedParam(param) => ResolveError::UnusedParam {
                    route: name.to_string(),
                    param,
                },
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::registry::RegistryBuilder;

    fn test_registry() -> RouteRegistry<()> {
        let mut builder = RegistryBuilder::new();
        builder.register("/", (), "home", Some("Home"), false);
        builder.register("/blog", (), "blog", Some("Blog"), false);
        builder.register("/blog/:slug", (), "blog-single", None, false);
        builder.build()
    }

    #[test]
    fn test_path_for_registered_names() {
        let registry = test_registry();
        assert_eq!(registry.path_for("home"), "/");
        assert_eq!(registry.path_for("blog"), "/blog");
        assert_eq!(registry.path_for("blog-single"), "/blog/:slug");
    }

    #[test]
    fn test_path_for_falls_back_to_root() {
        let registry = test_registry();
        assert_eq!(registry.path_for("nonexistent"), "/");
    }

    #[test]
    fn test_resolve_substitutes_params() {
        let registry = test_registry();
        assert_eq!(
            registry.resolve("blog-single", &[("slug", "solar-panels")]),
            "/blog/solar-panels"
        );
    }

    #[test]
    fn test_resolve_without_params_keeps_placeholder() {
        // The historical gap, kept on purpose: nothing substitutes :slug.
        let registry = test_registry();
        assert_eq!(registry.resolve("blog-single", &[]), "/blog/:slug");
    }

    #[test]
    fn test_resolve_unknown_name_falls_back() {
        let registry = test_registry();
        assert_eq!(registry.resolve("nonexistent", &[("slug", "x")]), "/");
    }

    #[test]
    fn test_resolve_strict_errors() {
        let registry = test_registry();

        assert_eq!(
            registry.resolve_strict("blog-single", &[("slug", "solar-panels")]),
            Ok("/blog/solar-panels".to_string())
        );
        assert_eq!(
            registry.resolve_strict("nonexistent", &[]),
            Err(ResolveError::UnknownName("nonexistent".into()))
        );
        assert_eq!(
            registry.resolve_strict("blog-single", &[]),
            Err(ResolveError::MissingParam {
                route: "blog-single".into(),
                param: "slug".into()
            })
        );
        assert_eq!(
            registry.resolve_strict("blog", &[("slug", "x")]),
            Err(ResolveError::UnusedParam {
                route: "blog".into(),
                param: "slug".into()
            })
        );
    }

    #[test]
    fn test_resolution_is_pure() {
        let registry = test_registry();
        let first = registry.resolve("blog-single", &[("slug", "a")]);
        let second = registry.resolve("blog-single", &[("slug", "a")]);
        assert_eq!(first, second);
    }
}
