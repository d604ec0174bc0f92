//! Catalog views. Each view is its own container: it carries the `data-*`
//! marker, owns the fetch of its JSON file and renders the items with a
//! structured template.

use dioxus::prelude::*;
use tracing::error;

use content::catalog::{load_catalog, Catalog};
use content::CatalogError;

use crate::{reveal, use_asset_source, use_i18n, use_site_config, use_toasts};

mod blog;
mod case_studies;
mod products;
mod training;

pub use blog::{BlogList, BlogPreview};
pub use case_studies::{CaseCarousel, CaseStudyList};
pub use products::{ProductDetail, ProductList, ProductPreview};
pub use training::TrainingList;

pub(crate) type CatalogState<T> = Resource<Result<Vec<T>, CatalogError>>;

/// Load catalog `C` for the calling view. The task is dropped with the view;
/// once the items are on screen the reveal observer picks up the new cards.
pub(crate) fn use_catalog<C>() -> CatalogState<C::Item>
where
    C: Catalog + 'static,
    C::Item: Clone + 'static,
{
    let config = use_site_config();
    let source = use_asset_source();
    let reveal = config.reveal.clone();
    let items = use_resource(move || {
        let config = config.clone();
        let source = source.clone();
        async move {
            let loaded = load_catalog::<C, _>(&*source, &config).await;
            if let Err(err) = &loaded {
                error!("catalog: {err}");
            }
            loaded
        }
    });

    let i18n = use_i18n();
    let toasts = use_toasts();
    use_effect(move || match &*items.read() {
        Some(Ok(_)) => {
            let reveal = reveal.clone();
            spawn(async move {
                reveal::refresh(&reveal).await;
            });
        }
        Some(Err(err)) => {
            let dictionary = i18n.snapshot();
            toasts.error(
                dictionary.text_or("catalog.toast_title", "Chargement impossible"),
                Some(err.to_string()),
            );
        }
        None => {}
    });

    items
}

/// Shown in place of the items when the catalog file could not be loaded.
#[component]
fn CatalogUnavailable() -> Element {
    let i18n = use_i18n();
    rsx! {
        p { class: "hint catalog_error", role: "alert",
            {i18n.text("catalog.unavailable", "Contenu momentanément indisponible.")}
        }
    }
}

/// `None` while loading, the error hint on failure, otherwise `ready(items)`.
pub(crate) fn render_state<T>(
    state: Option<Result<Vec<T>, CatalogError>>,
    ready: impl FnOnce(Vec<T>) -> Element,
) -> Element {
    match state {
        None => rsx! {},
        Some(Err(_)) => rsx! { CatalogUnavailable {} },
        Some(Ok(items)) => ready(items),
    }
}

#[cfg(test)]
mod tests;
