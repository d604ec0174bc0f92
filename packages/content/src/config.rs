/// A language offered by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub label: &'static str,
}

/// Navbar behavior thresholds, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavConfig {
    /// Scroll offset past which the navbar gets the `scrolled` style.
    pub scrolled_threshold: f64,
    /// Extra margin above each section when deciding which link is active.
    pub lookahead: f64,
}

/// Options for the shared reveal-on-scroll observer.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub selectors: Vec<&'static str>,
}

/// Fixed UI delays, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub contact_reset_ms: u32,
    pub toast_ms: u32,
    pub hero_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub site_name: &'static str,
    /// Prefix for every fetched data and language file.
    pub asset_base: String,
    /// Local storage key holding the language preference.
    pub storage_key: &'static str,
    pub fallback_lang: &'static str,
    pub languages: Vec<LanguageOption>,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub timings: Timings,
    pub product_preview_len: usize,
    pub blog_preview_len: usize,
    /// Hero offset per scrolled pixel.
    pub parallax_rate: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Fermentierra",
            asset_base: "/assets".to_string(),
            storage_key: "fermentierra-lang",
            fallback_lang: "fr",
            languages: vec![
                LanguageOption {
                    code: "fr",
                    label: "Français",
                },
                LanguageOption {
                    code: "en",
                    label: "English",
                },
            ],
            nav: NavConfig {
                scrolled_threshold: 100.0,
                lookahead: 100.0,
            },
            reveal: RevealConfig {
                threshold: 0.1,
                root_margin: "0px 0px -50px 0px",
                selectors: vec![
                    ".advantage-card",
                    ".product-card",
                    ".service-card",
                    ".about-content",
                    ".contact-content",
                    ".case-study-card",
                    ".blog-card",
                ],
            },
            timings: Timings {
                contact_reset_ms: 5_000,
                toast_ms: 2_500,
                hero_delay_ms: 100,
            },
            product_preview_len: 3,
            blog_preview_len: 2,
            parallax_rate: 0.5,
        }
    }
}

impl SiteConfig {
    /// Same defaults, served from another prefix (e.g. a sub-path deployment).
    pub fn with_asset_base(asset_base: impl Into<String>) -> Self {
        Self {
            asset_base: asset_base.into(),
            ..Self::default()
        }
    }

    pub fn lang_path(&self, code: &str) -> String {
        format!("{}/lang/{code}.json", self.base())
    }

    pub fn data_path(&self, file: &str) -> String {
        format!("{}/data/{file}", self.base())
    }

    fn base(&self) -> &str {
        self.asset_base.trim_end_matches('/')
    }
}
