use dioxus::prelude::*;

use content::MemorySource;

use super::{BlogPreview, ProductDetail, ProductList, ProductPreview};
use crate::testing::render;

const PRODUCTS: &str = r#"{"products": [
    {"id": 1, "name": "Kimchi", "range": "Condiments"},
    {"id": 2, "name": "Kombucha", "range": "Boissons"},
    {"id": 3, "name": "Miso", "range": "Condiments"},
    {"id": 4, "name": "Kefir", "range": "Boissons"},
    {"id": 5, "name": "Atelier"}
]}"#;

const POSTS: &str = r#"{"posts": [
    {"slug": "a", "title": "Premier"},
    {"slug": "b", "title": "Deuxième"},
    {"slug": "c", "title": "Troisième"},
    {"slug": "d", "title": "Quatrième"},
    {"slug": "e", "title": "Cinquième"}
]}"#;

fn site() -> MemorySource {
    MemorySource::new()
        .with("/assets/data/products.json", PRODUCTS)
        .with("/assets/data/blog.json", POSTS)
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not rendered in {html}"))
}

#[tokio::test]
async fn product_list_renders_ranges_in_first_seen_order() {
    let html = render(|| rsx! { ProductList {} }, site()).await;

    let condiments = position(&html, "Condiments");
    let kimchi = position(&html, "Kimchi");
    let miso = position(&html, "Miso");
    let boissons = position(&html, "Boissons");
    let kombucha = position(&html, "Kombucha");
    let autres = position(&html, "Autres");
    assert!(condiments < kimchi && kimchi < miso && miso < boissons);
    assert!(boissons < kombucha && kombucha < autres);
    assert_eq!(html.matches("class=\"product_range\"").count(), 3);
}

#[tokio::test]
async fn previews_cap_the_number_of_cards() {
    let products = render(|| rsx! { ProductPreview {} }, site()).await;
    assert_eq!(products.matches("class=\"product-card\"").count(), 3);
    assert!(!products.contains("Kefir"));

    let posts = render(|| rsx! { BlogPreview {} }, site()).await;
    assert_eq!(posts.matches("class=\"blog-card\"").count(), 2);
    assert!(!posts.contains("Troisième"));
}

#[tokio::test]
async fn product_detail_follows_the_query_string() {
    let html = render(|| rsx! { ProductDetail { search: "?id=2".to_string() } }, site()).await;
    assert!(html.contains("Kombucha"));
    assert!(!html.contains("Kimchi"));

    let html = render(|| rsx! { ProductDetail { search: "?id=99".to_string() } }, site()).await;
    assert!(html.contains("Kimchi"));
    assert!(!html.contains("Kombucha"));
}

#[tokio::test]
async fn missing_catalog_file_shows_the_error_hint() {
    let html = render(|| rsx! { ProductList {} }, MemorySource::new()).await;
    assert!(html.contains("catalog_error"));
    assert!(html.contains("data-products"));
    assert!(!html.contains("product-card"));
    assert_eq!(html.matches("toast toast_error").count(), 1);
    assert!(html.contains("products.json"));
}

#[tokio::test]
async fn product_cards_point_at_their_sheet() {
    let html = render(|| rsx! { ProductPreview {} }, site()).await;
    assert!(html.contains("data-target=\"/product?id=1\""));
    assert!(html.contains("role=\"link\""));
}
