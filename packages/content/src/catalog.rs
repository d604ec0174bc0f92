//! The four JSON catalogs shown on the site and the selection logic the
//! views apply to them (grouping, previews, detail lookup).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::SiteConfig;
use crate::source::{fetch_json, AssetSource, FetchError};

/// Range bucket for products that do not name one.
pub const DEFAULT_RANGE: &str = "Autres";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("failed to load {file}: {source}")]
    Load {
        file: &'static str,
        #[source]
        source: FetchError,
    },
}

/// Identifiers are strings in the data files but tolerate bare numbers.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    pub range: Option<String>,
    pub usage: String,
    pub description: String,
    pub image: String,
    pub ingredients: Vec<String>,
    pub process: String,
    pub packaging: String,
    pub pairings: String,
}

impl Product {
    /// The grouping key, taken verbatim; only an empty or missing range
    /// falls into [`DEFAULT_RANGE`].
    pub fn range_label(&self) -> &str {
        match self.range.as_deref() {
            Some(range) if !range.is_empty() => range,
            _ => DEFAULT_RANGE,
        }
    }

    pub fn detail_href(&self) -> String {
        format!("/product?id={}", urlencoding::encode(&self.id))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseStudy {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub client: String,
    pub image: String,
    pub problem: String,
    pub solution: String,
    pub results: String,
    pub testimonial: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub excerpt: String,
    pub image: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingSession {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub title: String,
    pub date: String,
    pub format: String,
    pub description: String,
    pub registration: String,
}

/// A JSON file holding one named array of items.
pub trait Catalog: DeserializeOwned {
    type Item;
    const FILE: &'static str;

    fn into_items(self) -> Vec<Self::Item>;
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductCatalog {
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog for ProductCatalog {
    type Item = Product;
    const FILE: &'static str = "products.json";

    fn into_items(self) -> Vec<Product> {
        self.products
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CaseStudyCatalog {
    #[serde(default)]
    pub studies: Vec<CaseStudy>,
}

impl Catalog for CaseStudyCatalog {
    type Item = CaseStudy;
    const FILE: &'static str = "case-studies.json";

    fn into_items(self) -> Vec<CaseStudy> {
        self.studies
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BlogCatalog {
    #[serde(default)]
    pub posts: Vec<BlogPost>,
}

impl Catalog for BlogCatalog {
    type Item = BlogPost;
    const FILE: &'static str = "blog.json";

    fn into_items(self) -> Vec<BlogPost> {
        self.posts
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TrainingCatalog {
    #[serde(default)]
    pub sessions: Vec<TrainingSession>,
}

impl Catalog for TrainingCatalog {
    type Item = TrainingSession;
    const FILE: &'static str = "training.json";

    fn into_items(self) -> Vec<TrainingSession> {
        self.sessions
    }
}

/// Fetch a catalog file and return its items. Every call refetches.
pub async fn load_catalog<C, S>(source: &S, config: &SiteConfig) -> Result<Vec<C::Item>, CatalogError>
where
    C: Catalog,
    S: AssetSource + ?Sized,
{
    let path = config.data_path(C::FILE);
    let catalog: C = fetch_json(source, &path)
        .await
        .map_err(|source| CatalogError::Load {
            file: C::FILE,
            source,
        })?;
    let items = catalog.into_items();
    debug!("catalog: {} items from {path}", items.len());
    Ok(items)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeGroup<'a> {
    pub range: &'a str,
    pub products: Vec<&'a Product>,
}

/// Group products by range, ranges in first-seen order, products in
/// source order within each range.
pub fn group_by_range(products: &[Product]) -> Vec<RangeGroup<'_>> {
    let mut groups: Vec<RangeGroup<'_>> = Vec::new();
    for product in products {
        let range = product.range_label();
        match groups.iter_mut().find(|g| g.range == range) {
            Some(group) => group.products.push(product),
            None => groups.push(RangeGroup {
                range,
                products: vec![product],
            }),
        }
    }
    groups
}

/// Exact id match, otherwise the first product. `None` only when empty.
pub fn find_product<'a>(products: &'a [Product], id: Option<&str>) -> Option<&'a Product> {
    id.and_then(|id| products.iter().find(|p| p.id == id))
        .or_else(|| products.first())
}

/// The first `len` items (home-page teasers).
pub fn preview<T>(items: &[T], len: usize) -> &[T] {
    &items[..items.len().min(len)]
}

/// Move a carousel index by `delta`, wrapping at both ends.
pub fn carousel_step(current: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (current as isize + delta).rem_euclid(len) as usize
}

pub fn product_page_title(product: &Product, config: &SiteConfig) -> String {
    format!("{} - {}", product.name, config.site_name)
}
