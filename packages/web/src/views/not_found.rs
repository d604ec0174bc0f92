use dioxus::prelude::*;
use tracing::warn;
use ui::use_i18n;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let i18n = use_i18n();
    use_hook(|| warn!("router: no page at /{}", segments.join("/")));
    rsx! {
        section { class: "section page_top not_found",
            h1 { {i18n.text("not_found.title", "Page introuvable")} }
            a { class: "btn primary", href: "/", {i18n.text("not_found.home", "Retour à l'accueil")} }
        }
    }
}
