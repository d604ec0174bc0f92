use dioxus::prelude::*;

use content::catalog::{TrainingCatalog, TrainingSession};

use super::{render_state, use_catalog};
use crate::use_i18n;

#[component]
fn TrainingCard(session: TrainingSession) -> Element {
    let i18n = use_i18n();
    rsx! {
        article { class: "service-card training_card",
            div { class: "training_meta",
                time { "{session.date}" }
                if !session.format.is_empty() {
                    span { class: "badge", "{session.format}" }
                }
            }
            h3 { "{session.title}" }
            p { "{session.description}" }
            if !session.registration.is_empty() {
                a {
                    class: "btn primary",
                    href: "{session.registration}",
                    target: "_blank",
                    rel: "noopener",
                    {i18n.text("training.register", "S'inscrire")}
                }
            }
        }
    }
}

#[component]
pub fn TrainingList() -> Element {
    let sessions = use_catalog::<TrainingCatalog>();
    let body = render_state(sessions(), |items| {
        rsx! {
            for session in items {
                TrainingCard { key: "{session.id}", session }
            }
        }
    });

    rsx! {
        div { class: "training_grid", "data-training-list": "", {body} }
    }
}
