use dioxus::prelude::*;
use ui::{use_i18n, BlogList};

#[component]
pub fn Blog() -> Element {
    let i18n = use_i18n();
    let title = i18n.text("blog.page_title", "Journal - Fermentierra");
    rsx! {
        document::Title { "{title}" }
        section { id: "blog", class: "section page_top",
            h1 { {i18n.text("blog.title", "Le journal")} }
            BlogList {}
        }
    }
}
