//! Boot-to-chrome integration: config through kernel to display models.

use chrono::{DateTime, Utc};

use cuzinfest_site::chrome::{newsletter_signup, Footer};
use cuzinfest_site::event::{Countdown, Slideshow};
use cuzinfest_site::forms::ContactForm;
use cuzinfest_site::site::PageKind;
use cuzinfest_site::SiteConfig;

mod common;

fn at(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse().unwrap()
}

#[test]
fn test_every_page_is_navigable() {
    let site = common::boot_site();

    let expected = [
        ("/", PageKind::Home),
        ("/about", PageKind::About),
        ("/pricing", PageKind::Pricing),
        ("/blog", PageKind::Blog),
        ("/blog/mahikeng-market-day", PageKind::BlogSingle),
        ("/contact", PageKind::Contact),
        ("/login", PageKind::Login),
        ("/register", PageKind::Register),
        ("/opportunities", PageKind::Opportunities),
    ];

    for (path, kind) in expected {
        let (view, _) = site.render(path).unwrap_or_else(|| panic!("no view for {path}"));
        assert_eq!(view.kind, kind, "wrong page behind {path}");
    }
}

#[test]
fn test_announcement_bar_before_festival() {
    let site = common::boot_site();
    let announcement = site.announcement(at("2026-06-01T07:00:00Z"));

    assert_eq!(announcement.headline, "CuzinFest 2026 – 16 June | Mhk");
    assert_eq!(announcement.days_line.as_deref(), Some("~15 days to go – Don't sleep on this!"));
    assert_eq!(announcement.cta_link, "/tickets");
}

#[test]
fn test_countdown_matches_configured_start() {
    let site = common::boot_site();
    let start = site.config().event.start_time().unwrap();

    // One hour before doors.
    let countdown = Countdown::until(start, at("2026-06-16T06:00:00Z"));
    assert_eq!(
        countdown,
        Countdown {
            days: 0,
            hours: 1,
            minutes: 0,
            seconds: 0
        }
    );

    let after = Countdown::until(start, at("2026-06-16T10:00:00Z"));
    assert!(after.is_elapsed());
}

#[test]
fn test_footer_links_come_from_registry() {
    let site = common::boot_site();
    let footer = Footer::build(site.config(), site.registry(), 2026);

    let explore: Vec<_> = footer.sections[0]
        .links
        .iter()
        .map(|link| link.to.as_str())
        .collect();
    assert_eq!(explore, ["/about", "/pricing", "/contact"]);

    assert_eq!(footer.copyright, "© 2026 CuzinFest. All rights reserved.");
    assert!(footer.social.instagram.contains("instagram.com"));
}

#[test]
fn test_opportunities_slideshow_over_catalog() {
    let site = common::boot_site();
    let listings = site.catalog().opportunities();

    let mut show = Slideshow::new(listings.len());
    let first = show.current().unwrap();

    // A full cycle of timer ticks returns to the first listing.
    for _ in 0..listings.len() {
        show.next();
    }
    assert_eq!(show.current(), Some(first));
}

#[test]
fn test_contact_form_round_trip() {
    let form = ContactForm {
        full_name: "Kabelo Dire".to_string(),
        email: "kabelo@example.org".to_string(),
        company: "Bokone Collective".to_string(),
        service: "pitch-stage".to_string(),
    };
    assert!(form.submit().is_ok());

    let blank = ContactForm::default();
    let errors = blank.submit().unwrap_err();
    assert_eq!(errors.len(), 3);
}

#[test]
fn test_newsletter_signup_accepts_valid_address() {
    assert!(newsletter_signup("cousin@cuzinfest.com").is_ok());
    assert!(newsletter_signup("no-at-sign").is_err());
}

#[test]
fn test_custom_config_flows_through() {
    let mut config = SiteConfig::default();
    config.site.name = "CuzinFest Winter Edition".to_string();
    config.announcement.headline = "CuzinFest Winter – 12 July | Mhk".to_string();

    let site = cuzinfest_site::Site::boot(config).unwrap();
    let announcement = site.announcement(at("2026-06-01T07:00:00Z"));
    assert_eq!(announcement.headline, "CuzinFest Winter – 12 July | Mhk");

    let footer = Footer::build(site.config(), site.registry(), 2027);
    assert_eq!(
        footer.copyright,
        "© 2027 CuzinFest Winter Edition. All rights reserved."
    );
}

#[test]
fn test_blog_page_data_joins_routing_and_content() {
    let site = common::boot_site();

    // The blog index links each post through the resolver.
    for post in site.catalog().posts() {
        let href = site
            .registry()
            .resolve("blog-single", &[("slug", post.slug.as_str())]);
        assert_eq!(href, format!("/blog/{}", post.slug));

        // Following the link dispatches back to the same post.
        let (view, params) = site.render(&href).unwrap();
        assert_eq!(view.kind, PageKind::BlogSingle);
        assert_eq!(
            site.catalog().post_by_slug(params.get("slug").unwrap()).unwrap().slug,
            post.slug
        );
    }
}
