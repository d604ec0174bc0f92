//! Platform-independent core of the Fermentierra site: configuration, data
//! model, translation lookup and the decision logic behind every widget.
//!
//! Nothing in here touches the DOM. The `ui` crate drives these types from
//! Dioxus components.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod i18n;
pub mod includes;
pub mod navigation;
pub mod query;
pub mod source;

pub use catalog::CatalogError;
pub use config::SiteConfig;
pub use i18n::Dictionary;
pub use source::{AssetSource, FetchError, MemorySource};
