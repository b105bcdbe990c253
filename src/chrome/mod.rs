//! Layout chrome shared by every page: announcement bar, navigation menu
//! state, call-to-action banner, and footer.
//!
//! Chrome components are pure projections of the route registry and the
//! site config; the mobile menu flag in [`menu`] is the only mutable state.

pub mod announcement;
pub mod cta;
pub mod footer;
pub mod menu;

pub use announcement::Announcement;
pub use cta::CtaBanner;
pub use footer::{newsletter_signup, Footer, FooterLink, FooterSection};
pub use menu::MenuState;
