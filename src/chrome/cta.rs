//! Call-to-action banner model.

/// The closing banner pages render above the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaBanner {
    pub title: String,
    pub subtitle: Option<String>,
    pub cta_text: String,
    pub cta_link: String,
}

impl CtaBanner {
    /// Page-specific banner.
    pub fn new(
        title: impl Into<String>,
        subtitle: Option<&str>,
        cta_text: impl Into<String>,
        cta_link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.map(str::to_string),
            cta_text: cta_text.into(),
            cta_link: cta_link.into(),
        }
    }
}

/// The stock partner-recruitment banner most pages use.
impl Default for CtaBanner {
    fn default() -> Self {
        Self {
            title: "Become a partner, promote your business".to_string(),
            subtitle: None,
            cta_text: "Get in touch".to_string(),
            cta_link: "/contact".to_string(),
        }
    }
}
