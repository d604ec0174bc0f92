use dioxus::prelude::*;
use ui::{use_i18n, ProductDetail, ProductList};

use super::ContactSection;

#[component]
pub fn Products() -> Element {
    let i18n = use_i18n();
    let title = i18n.text("products.page_title", "Nos produits - Fermentierra");
    rsx! {
        document::Title { "{title}" }
        section { id: "products", class: "section page_top",
            h1 { {i18n.text("products.title", "Nos produits")} }
            p { class: "lead", {i18n.text("products.intro", "Toute la gamme, classée par famille.")} }
            ProductList {}
        }
    }
}

/// The sheet reads `id` from the URL itself; keying on it remounts the view
/// (and refetches) when the visitor moves between products.
#[component]
pub fn Product(id: String) -> Element {
    rsx! {
        section { id: "product", class: "section page_top",
            ProductDetail { key: "{id}" }
        }
        ContactSection {}
    }
}
