use dioxus::prelude::*;
use ui::{use_i18n, CaseStudyList};

#[component]
pub fn CaseStudies() -> Element {
    let i18n = use_i18n();
    let title = i18n.text("cases.page_title", "Références - Fermentierra");
    rsx! {
        document::Title { "{title}" }
        section { id: "case-studies", class: "section page_top",
            h1 { {i18n.text("cases.title", "Études de cas")} }
            CaseStudyList {}
        }
    }
}
