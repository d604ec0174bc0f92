//! Shared Dioxus components for the Fermentierra site.

use dioxus::prelude::*;

use content::SiteConfig;

mod browser;

mod source;
pub use source::{use_asset_source, HttpSource, SharedSource};

mod i18n;
pub use i18n::{use_i18n, I18n, I18nProvider, LanguageSelector};

mod includes;
pub use includes::Includes;

mod catalog;
pub use catalog::{
    BlogList, BlogPreview, CaseCarousel, CaseStudyList, ProductDetail, ProductList,
    ProductPreview, TrainingList,
};

mod navbar;
pub use navbar::{NavItem, Navbar};

mod reveal;
pub use reveal::RevealObserver;

mod contact;
pub use contact::ContactForm;

mod callback;
pub use callback::CallbackWidget;

mod toast;
pub use toast::{use_toasts, ToastKind, ToastProvider, Toasts};

mod hero;
pub use hero::Hero;

mod footer;
pub use footer::Footer;

mod theme;
pub use theme::SiteTheme;

#[cfg(test)]
mod testing;

/// The site configuration provided by the app shell.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}
