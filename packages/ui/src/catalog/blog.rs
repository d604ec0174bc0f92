use dioxus::prelude::*;

use content::catalog::{preview, BlogCatalog, BlogPost};

use super::{render_state, use_catalog};
use crate::{use_i18n, use_site_config};

#[component]
fn BlogCard(post: BlogPost) -> Element {
    let i18n = use_i18n();
    rsx! {
        article { class: "blog-card",
            if !post.image.is_empty() {
                img { src: "{post.image}", alt: "{post.title}", loading: "lazy" }
            }
            div { class: "blog_meta",
                span { class: "badge", "{post.category}" }
                time { "{post.date}" }
            }
            h3 { "{post.title}" }
            p { "{post.excerpt}" }
            if !post.url.is_empty() {
                a {
                    class: "read_more",
                    href: "{post.url}",
                    target: "_blank",
                    rel: "noopener",
                    {i18n.text("blog.read_more", "Lire l'article")}
                }
            }
        }
    }
}

#[component]
pub fn BlogList() -> Element {
    let posts = use_catalog::<BlogCatalog>();
    let body = render_state(posts(), |items| {
        rsx! {
            for post in items {
                BlogCard { key: "{post.slug}", post }
            }
        }
    });

    rsx! {
        div { class: "blog_grid", "data-blog-list": "", {body} }
    }
}

#[component]
pub fn BlogPreview() -> Element {
    let len = use_site_config().blog_preview_len;
    let posts = use_catalog::<BlogCatalog>();
    let body = render_state(posts(), |items| {
        rsx! {
            for post in preview(&items, len) {
                BlogCard { key: "{post.slug}", post: post.clone() }
            }
        }
    });

    rsx! {
        div { class: "blog_grid", "data-blog-preview": "", {body} }
    }
}
