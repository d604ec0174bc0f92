use dioxus::prelude::*;

use content::catalog::{carousel_step, CaseStudy, CaseStudyCatalog};

use super::{render_state, use_catalog};
use crate::use_i18n;

#[component]
fn CaseStudyCard(study: CaseStudy) -> Element {
    let i18n = use_i18n();
    rsx! {
        article { class: "case-study-card",
            if !study.image.is_empty() {
                img { src: "{study.image}", alt: "{study.client}", loading: "lazy" }
            }
            h3 { "{study.client}" }
            dl { class: "case_facts",
                dt { {i18n.text("cases.problem", "Problématique")} }
                dd { "{study.problem}" }
                dt { {i18n.text("cases.solution", "Solution")} }
                dd { "{study.solution}" }
                dt { {i18n.text("cases.results", "Résultats")} }
                dd { "{study.results}" }
            }
            if !study.testimonial.is_empty() {
                blockquote { class: "testimonial",
                    p { "{study.testimonial}" }
                    footer { "{study.author}" }
                }
            }
        }
    }
}

#[component]
pub fn CaseStudyList() -> Element {
    let studies = use_catalog::<CaseStudyCatalog>();
    let body = render_state(studies(), |items| {
        rsx! {
            for study in items {
                CaseStudyCard { key: "{study.id}", study }
            }
        }
    });

    rsx! {
        div { class: "case_studies_grid", "data-case-studies": "", {body} }
    }
}

fn slide_class(active: bool) -> &'static str {
    if active {
        "case_slide active"
    } else {
        "case_slide"
    }
}

/// One slide per study; previous/next wrap around at both ends.
#[component]
pub fn CaseCarousel() -> Element {
    let i18n = use_i18n();
    let studies = use_catalog::<CaseStudyCatalog>();
    let mut current = use_signal(|| 0_usize);

    let body = render_state(studies(), |items| {
        let len = items.len();
        if len == 0 {
            return rsx! {};
        }
        let active = current().min(len - 1);
        let position = format!("{} / {len}", active + 1);
        rsx! {
            div { class: "case_track",
                for (index, study) in items.into_iter().enumerate() {
                    div {
                        key: "{study.id}",
                        class: slide_class(index == active),
                        "aria-hidden": if index == active { "false" } else { "true" },
                        blockquote {
                            p { "{study.testimonial}" }
                            footer {
                                strong { "{study.author}" }
                                span { " · {study.client}" }
                            }
                        }
                    }
                }
            }
            div { class: "case_controls",
                button {
                    class: "btn carousel_prev",
                    r#type: "button",
                    "aria-label": i18n.text("cases.previous", "Précédent"),
                    onclick: move |_| current.set(carousel_step(active, len, -1)),
                    "‹"
                }
                span { class: "case_position", "{position}" }
                button {
                    class: "btn carousel_next",
                    r#type: "button",
                    "aria-label": i18n.text("cases.next", "Suivant"),
                    onclick: move |_| current.set(carousel_step(active, len, 1)),
                    "›"
                }
            }
        }
    });

    rsx! {
        div { class: "case_carousel", "data-case-carousel": "", {body} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_slide_is_marked() {
        assert_eq!(slide_class(true), "case_slide active");
        assert_eq!(slide_class(false), "case_slide");
    }
}
