use dioxus::prelude::*;
use ui::{use_i18n, BlogPreview, CaseCarousel, Hero, Includes, ProductPreview};

use super::ContactSection;

const ADVANTAGES: [(&str, &str, &str, &str); 3] = [
    (
        "home.advantages.living.title",
        "Vivant",
        "home.advantages.living.body",
        "Des ferments non pasteurisés, riches en saveurs et en probiotiques.",
    ),
    (
        "home.advantages.local.title",
        "Local",
        "home.advantages.local.body",
        "Des légumes et des fruits de producteurs voisins, au fil des saisons.",
    ),
    (
        "home.advantages.craft.title",
        "Artisanal",
        "home.advantages.craft.body",
        "De petites séries, fermentées lentement dans notre atelier.",
    ),
];

#[component]
pub fn Home() -> Element {
    let i18n = use_i18n();

    rsx! {
        Hero {}

        section { id: "advantages", class: "section",
            div { class: "advantages_grid",
                for (title_key, title, body_key, body) in ADVANTAGES {
                    article { key: "{title_key}", class: "advantage-card",
                        h3 { {i18n.text(title_key, title)} }
                        p { {i18n.text(body_key, body)} }
                    }
                }
            }
        }

        section { id: "products", class: "section",
            h2 { {i18n.text("home.products.title", "Nos ferments")} }
            ProductPreview {}
        }

        section { id: "about", class: "section",
            div { class: "about-content",
                Includes { sources: vec!["/components/manifesto.html".to_string()] }
            }
        }

        section { id: "cases", class: "section",
            h2 { {i18n.text("home.cases.title", "Ils nous font confiance")} }
            CaseCarousel {}
        }

        section { id: "blog", class: "section",
            h2 { {i18n.text("home.blog.title", "Le journal")} }
            BlogPreview {}
            a { class: "btn", href: "/blog", {i18n.text("home.blog.all", "Tous les articles")} }
        }

        ContactSection {}
    }
}
