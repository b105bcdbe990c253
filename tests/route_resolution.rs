//! End-to-end checks of the registry, resolver, and navigation projection.

use cuzinfest_site::routing::{RegistryBuilder, ResolveError};

mod common;

#[test]
fn test_path_for_returns_registered_paths() {
    let registry = common::sample_registry();

    for route in registry.all() {
        assert_eq!(registry.path_for(route.name()), route.path());
    }
}

#[test]
fn test_path_for_unknown_name_is_root() {
    let registry = common::sample_registry();
    assert_eq!(registry.path_for("nonexistent"), "/");
}

#[test]
fn test_resolve_substitutes_slug() {
    let registry = common::sample_registry();
    assert_eq!(
        registry.resolve("blog-single", &[("slug", "solar-panels")]),
        "/blog/solar-panels"
    );
}

#[test]
fn test_resolve_without_params_keeps_placeholder() {
    let registry = common::sample_registry();
    assert_eq!(registry.resolve("blog-single", &[]), "/blog/:slug");
}

#[test]
fn test_nav_projection_filters_and_orders() {
    let registry = common::sample_registry();

    let names: Vec<_> = registry
        .nav_items()
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, ["about", "pricing", "contact"]);
}

#[test]
fn test_registry_length_tracks_registrations() {
    let mut builder = RegistryBuilder::new();
    for i in 0..5 {
        let path = format!("/page-{i}");
        let name = format!("page-{i}");
        builder.register(&path, (), name, None, false);
    }
    let registry = builder.build();
    assert_eq!(registry.len(), 5);
    assert_eq!(registry.all().len(), 5);
}

#[test]
fn test_repeated_queries_are_identical() {
    let registry = common::sample_registry();

    assert_eq!(registry.path_for("about"), registry.path_for("about"));
    assert_eq!(
        registry.resolve("blog-single", &[("slug", "a")]),
        registry.resolve("blog-single", &[("slug", "a")])
    );
    assert_eq!(registry.nav_items(), registry.nav_items());
}

#[test]
fn test_strict_resolution_reports_mismatches() {
    let registry = common::sample_registry();

    assert_eq!(
        registry.resolve_strict("blog-single", &[("slug", "solar-panels")]),
        Ok("/blog/solar-panels".to_string())
    );

    assert!(matches!(
        registry.resolve_strict("nonexistent", &[]),
        Err(ResolveError::UnknownName(_))
    ));
    assert!(matches!(
        registry.resolve_strict("blog-single", &[]),
        Err(ResolveError::MissingParam { .. })
    ));
    assert!(matches!(
        registry.resolve_strict("about", &[("slug", "x")]),
        Err(ResolveError::UnusedParam { .. })
    ));
}

#[test]
fn test_site_registry_exposes_same_contract() {
    // The booted site's registry behaves exactly like a hand-built one.
    let site = common::boot_site();
    let registry = site.registry();

    assert_eq!(registry.path_for("home"), "/");
    assert_eq!(registry.path_for("blog-single"), "/blog/:slug");
    assert_eq!(
        registry.resolve("blog-single", &[("slug", "feast-economics")]),
        "/blog/feast-economics"
    );

    let labels: Vec<_> = registry
        .nav_items()
        .into_iter()
        .map(|item| item.label)
        .collect();
    assert_eq!(labels, ["About", "Community", "Contact"]);
}
