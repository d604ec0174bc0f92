use dioxus::prelude::*;

use crate::{browser, use_i18n, use_site_config, Includes};

#[component]
pub fn Footer() -> Element {
    let i18n = use_i18n();
    let config = use_site_config();
    let current_year = use_resource(|| async { browser::current_year().await });
    let includes = vec![
        "/components/partners.html".to_string(),
        "/components/legal.html".to_string(),
    ];

    rsx! {
        footer { class: "site_footer",
            div { class: "footer_inner",
                a {
                    class: "footer-logo",
                    href: "/",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        spawn(browser::scroll_to_top());
                    },
                    "{config.site_name}"
                }
                p { class: "footer_tagline", {i18n.text("footer.tagline", "Ferments vivants, faits main.")} }
                Includes { sources: includes }
            }
            p { class: "footer_copy",
                if let Some(Some(year)) = current_year() {
                    span { id: "currentYear", "© {year} " }
                }
                "{config.site_name}. "
                {i18n.text("footer.rights", "Tous droits réservés.")}
            }
        }
    }
}
