use dioxus::prelude::*;

use content::catalog::{
    find_product, group_by_range, preview, product_page_title, Product, ProductCatalog,
};
use content::query::query_param;

use super::{render_state, use_catalog};
use crate::{browser, use_i18n, use_site_config, use_toasts, ToastKind};

#[component]
fn AddToCart(name: String) -> Element {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let toast_ms = use_site_config().timings.toast_ms;
    rsx! {
        button {
            class: "btn primary add_to_cart",
            r#type: "button",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                let title = format!("{} : {name}", i18n.text("cart.added", "Ajouté au panier"));
                toasts.flash(title, ToastKind::Success, toast_ms);
            },
            {i18n.text("products.add", "Ajouter")}
        }
    }
}

/// The whole card opens the product sheet; its own link and cart button
/// keep their click to themselves.
#[component]
fn ProductCard(product: Product) -> Element {
    let i18n = use_i18n();
    let href = product.detail_href();
    let target = href.clone();
    rsx! {
        article {
            class: "product-card",
            role: "link",
            tabindex: "0",
            "data-target": "{href}",
            onclick: move |_| {
                navigator().push(target.as_str());
            },
            if !product.image.is_empty() {
                img { class: "product_image", src: "{product.image}", alt: "{product.name}", loading: "lazy" }
            }
            div { class: "product_body",
                span { class: "badge", "{product.range_label()}" }
                h4 { "{product.name}" }
                if !product.usage.is_empty() {
                    p { class: "product_usage", "{product.usage}" }
                }
                p { class: "product_description", "{product.description}" }
                div { class: "product_actions",
                    a {
                        class: "btn",
                        href: "{href}",
                        onclick: |evt: MouseEvent| evt.stop_propagation(),
                        {i18n.text("products.view", "Voir la fiche")}
                    }
                    AddToCart { name: product.name.clone() }
                }
            }
        }
    }
}

/// Every product, one section per range in first-seen order.
#[component]
pub fn ProductList() -> Element {
    let products = use_catalog::<ProductCatalog>();
    let body = render_state(products(), |items| {
        let groups = group_by_range(&items);
        rsx! {
            for group in groups {
                section { key: "{group.range}", class: "product_range",
                    h3 { class: "range_title", "{group.range}" }
                    div { class: "products_grid",
                        for product in group.products {
                            ProductCard { key: "{product.id}", product: product.clone() }
                        }
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "products_catalog", "data-products": "", {body} }
    }
}

#[component]
pub fn ProductPreview() -> Element {
    let i18n = use_i18n();
    let len = use_site_config().product_preview_len;
    let products = use_catalog::<ProductCatalog>();
    let body = render_state(products(), |items| {
        rsx! {
            div { class: "products_grid",
                for product in preview(&items, len) {
                    ProductCard { key: "{product.id}", product: product.clone() }
                }
            }
            a { class: "btn", href: "/products", {i18n.text("products.all", "Toute la gamme")} }
        }
    });

    rsx! {
        div { class: "products_preview", "data-products-preview": "", {body} }
    }
}

/// Detail sheet for `?id=` in `search`, or in the current URL when no query
/// string is given. Unknown or missing ids show the first product.
#[component]
pub fn ProductDetail(search: Option<String>) -> Element {
    let products = use_catalog::<ProductCatalog>();
    let search = use_resource(use_reactive!(|(search,)| async move {
        match search {
            Some(search) => search,
            None => browser::location_search().await,
        }
    }));
    let body = render_state(products(), |items| {
        let Some(search) = search() else {
            return rsx! {};
        };
        let id = query_param(&search, "id");
        match find_product(&items, id.as_deref()) {
            Some(product) => rsx! { ProductSheet { product: product.clone() } },
            None => rsx! {},
        }
    });

    rsx! {
        div { class: "product_detail", "data-product-detail": "", {body} }
    }
}

#[component]
fn ProductSheet(product: Product) -> Element {
    let i18n = use_i18n();
    let config = use_site_config();
    let title = product_page_title(&product, &config);
    let steps = [
        ("product.process", "Procédé", product.process.clone()),
        ("product.packaging", "Conditionnement", product.packaging.clone()),
        ("product.pairings", "Accords", product.pairings.clone()),
    ];

    rsx! {
        document::Title { "{title}" }
        div { class: "product_hero",
            if !product.image.is_empty() {
                img { class: "product_detail_image", src: "{product.image}", alt: "{product.name}" }
            }
            div { class: "product_summary",
                div { class: "badges",
                    span { class: "badge", "{product.range_label()}" }
                    if !product.usage.is_empty() {
                        span { class: "badge badge_usage", "{product.usage}" }
                    }
                }
                h1 { "{product.name}" }
                p { class: "lead", "{product.description}" }
                div { class: "product_actions",
                    AddToCart { name: product.name.clone() }
                    a { class: "btn", href: "#contact", {i18n.text("product.quote", "Demander un devis")} }
                }
            }
        }
        if !product.ingredients.is_empty() {
            section { class: "product_ingredients",
                h2 { {i18n.text("product.ingredients", "Ingrédients")} }
                ul {
                    for ingredient in product.ingredients.iter() {
                        li { "{ingredient}" }
                    }
                }
            }
        }
        ol { class: "timeline",
            for (key, default, text) in steps.into_iter().filter(|(_, _, text)| !text.is_empty()) {
                li { key: "{key}", class: "timeline_step",
                    h3 { {i18n.text(key, default)} }
                    p { "{text}" }
                }
            }
        }
    }
}
