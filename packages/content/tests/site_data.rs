//! Checks the data files shipped with the web app against the content model.

use content::catalog::{
    find_product, group_by_range, load_catalog, preview, BlogCatalog, CaseStudyCatalog,
    ProductCatalog, TrainingCatalog,
};
use content::contact::ContactSubmission;
use content::i18n::fetch_translations;
use content::includes::load_components;
use content::{MemorySource, SiteConfig};

const PUBLIC_FILES: [(&str, &str); 9] = [
    ("/assets/lang/fr.json", include_str!("../../web/public/assets/lang/fr.json")),
    ("/assets/lang/en.json", include_str!("../../web/public/assets/lang/en.json")),
    ("/assets/data/products.json", include_str!("../../web/public/assets/data/products.json")),
    ("/assets/data/case-studies.json", include_str!("../../web/public/assets/data/case-studies.json")),
    ("/assets/data/blog.json", include_str!("../../web/public/assets/data/blog.json")),
    ("/assets/data/training.json", include_str!("../../web/public/assets/data/training.json")),
    ("/components/manifesto.html", include_str!("../../web/public/components/manifesto.html")),
    ("/components/partners.html", include_str!("../../web/public/components/partners.html")),
    ("/components/legal.html", include_str!("../../web/public/components/legal.html")),
];

fn site() -> MemorySource {
    PUBLIC_FILES
        .iter()
        .fold(MemorySource::new(), |source, (path, body)| source.with(*path, *body))
}

fn i18n_keys(markup: &str) -> Vec<&str> {
    markup
        .split("data-i18n=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

#[tokio::test]
async fn both_languages_load_and_unknown_codes_fall_back_to_french() {
    let source = site();
    let config = SiteConfig::default();

    let fr = fetch_translations(&source, &config, "fr").await;
    let en = fetch_translations(&source, &config, "en").await;
    assert_eq!(fr.text("nav.products"), Some("Produits"));
    assert_eq!(en.text("nav.products"), Some("Products"));

    let de = fetch_translations(&source, &config, "de").await;
    assert_eq!(de, fr);
}

#[tokio::test]
async fn include_fragments_are_translated_in_every_language() {
    let source = site();
    let config = SiteConfig::default();
    let components = load_components(
        &source,
        ["/components/manifesto.html", "/components/partners.html", "/components/legal.html"],
    )
    .await;

    for code in ["fr", "en"] {
        let dictionary = fetch_translations(&source, &config, code).await;
        for component in &components {
            let markup = component.markup.as_deref().unwrap_or_default();
            let keys = i18n_keys(markup);
            assert!(!keys.is_empty(), "{} has no translatable nodes", component.src);
            let updates = dictionary.updates_for(keys.iter().copied());
            assert_eq!(updates.len(), keys.len(), "{code}: missing key in {}", component.src);
        }
    }
}

#[tokio::test]
async fn product_catalog_groups_and_resolves_detail_ids() {
    let source = site();
    let config = SiteConfig::default();
    let products = load_catalog::<ProductCatalog, _>(&source, &config).await.unwrap();

    let ranges: Vec<_> = group_by_range(&products).iter().map(|g| g.range).collect();
    assert_eq!(ranges, ["Condiments", "Boissons", "Autres"]);

    // numeric ids in the file are matched as strings
    assert_eq!(find_product(&products, Some("4")).unwrap().name, "Atelier découverte");
    assert_eq!(find_product(&products, Some("missing")).unwrap().id, "kimchi-classique");
    assert_eq!(preview(&products, config.product_preview_len).len(), 3);
}

#[tokio::test]
async fn remaining_catalogs_parse() {
    let source = site();
    let config = SiteConfig::default();

    let studies = load_catalog::<CaseStudyCatalog, _>(&source, &config).await.unwrap();
    assert_eq!(studies.len(), 3);
    assert_eq!(studies[2].id, "3");

    let posts = load_catalog::<BlogCatalog, _>(&source, &config).await.unwrap();
    assert_eq!(preview(&posts, config.blog_preview_len).len(), 2);
    assert!(posts.iter().all(|post| post.url.starts_with("https://")));

    let sessions = load_catalog::<TrainingCatalog, _>(&source, &config).await.unwrap();
    assert_eq!(sessions.len(), 3);
    assert!(sessions[2].registration.is_empty());
}

#[test]
fn every_contact_interest_in_the_dictionary_routes_to_a_mailbox() {
    let fr: serde_json::Value =
        serde_json::from_str(include_str!("../../web/public/assets/lang/fr.json")).unwrap();
    for interest in ["tasting", "subscription", "cocreation", "training", "quote"] {
        assert!(fr["contact"]["interest"][interest].is_string());
        let submission = ContactSubmission {
            interest: interest.to_string(),
            ..ContactSubmission::default()
        };
        assert!(submission.mailbox().ends_with("@fermentierra.com"));
        assert_ne!(submission.mailbox(), content::contact::DEFAULT_MAILBOX);
    }
}
