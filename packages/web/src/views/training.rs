use dioxus::prelude::*;
use ui::{use_i18n, TrainingList};

use super::ContactSection;

#[component]
pub fn Training() -> Element {
    let i18n = use_i18n();
    let title = i18n.text("training.page_title", "Formations - Fermentierra");
    rsx! {
        document::Title { "{title}" }
        section { id: "training", class: "section page_top",
            h1 { {i18n.text("training.title", "Formations")} }
            p { class: "lead",
                {i18n.text("training.intro", "Ateliers de fermentation pour les équipes de cuisine.")}
            }
            TrainingList {}
        }
        ContactSection {}
    }
}
