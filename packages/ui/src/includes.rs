use dioxus::prelude::*;
use tracing::debug;

use content::includes::load_components;

use crate::i18n::apply_translations;
use crate::{use_asset_source, use_i18n};

/// HTML fragments fetched by URL and injected in place, one `data-src` slot
/// per source, in order. Injected markup is translated once it is in the
/// DOM and again on every language switch.
#[component]
pub fn Includes(sources: Vec<String>) -> Element {
    let i18n = use_i18n();
    let source = use_asset_source();
    let components = use_resource(use_reactive!(|(sources,)| {
        let source = source.clone();
        async move { load_components(&*source, sources).await }
    }));

    use_effect(move || {
        if components.read().is_some() {
            spawn(async move {
                apply_translations(&i18n.snapshot()).await;
            });
        }
    });

    let Some(loaded) = components() else {
        return rsx! {};
    };
    debug!("includes: rendering {} slots", loaded.len());

    rsx! {
        for component in loaded {
            div {
                key: "{component.src}",
                class: "include",
                "data-src": "{component.src}",
                dangerous_inner_html: component.markup.unwrap_or_default(),
            }
        }
    }
}
