use dioxus::prelude::*;
use ui::{use_i18n, ContactForm};

/// The `#contact` section: intro text next to the form.
#[component]
pub fn ContactSection() -> Element {
    let i18n = use_i18n();
    rsx! {
        section { id: "contact", class: "section",
            div { class: "contact-content",
                div { class: "contact_intro",
                    h2 { {i18n.text("contact.title", "Parlons de votre projet")} }
                    p { {i18n.text("contact.intro", "Dégustation, abonnement, atelier ou devis : dites-nous tout.")} }
                }
                ContactForm {}
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let i18n = use_i18n();
    let title = i18n.text("contact.page_title", "Contact - Fermentierra");
    rsx! {
        document::Title { "{title}" }
        div { class: "page_top", ContactSection {} }
    }
}
