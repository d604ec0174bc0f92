use dioxus::prelude::*;
use tracing::debug;

use content::navigation::{NavState, ScrollSample};

use crate::{browser, use_i18n, use_site_config, LanguageSelector};

// Streams one sample per scroll event. A previous listener (from an earlier
// mount) is removed first.
const SCROLL_SPY_JS: &str = r#"
const previous = window.__fermentierraScrollSpy;
if (previous) window.removeEventListener("scroll", previous);
const send = () => {
  const nav = document.getElementById("navbar");
  const sections = Array.from(document.querySelectorAll("section[id]")).map((section) => ({
    id: section.id,
    top: section.offsetTop,
    height: section.offsetHeight,
  }));
  dioxus.send({
    scroll_y: window.scrollY,
    nav_height: nav ? nav.offsetHeight : 0,
    sections,
  });
};
window.__fermentierraScrollSpy = send;
window.addEventListener("scroll", send);
send();
"#;

/// One navbar link. `href` is either a same-page anchor (`#products`) or a
/// page path.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub href: String,
    /// Dictionary key for the label.
    pub key: &'static str,
    /// Label shown when the key does not resolve.
    pub label: &'static str,
}

impl NavItem {
    pub fn new(href: impl Into<String>, key: &'static str, label: &'static str) -> Self {
        Self {
            href: href.into(),
            key,
            label,
        }
    }
}

fn link_class(active: bool) -> &'static str {
    if active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

#[component]
fn NavLink(item: NavItem, state: Signal<NavState>) -> Element {
    let i18n = use_i18n();
    let active = state.read().is_active(&item.href);
    let href = item.href.clone();

    rsx! {
        li {
            a {
                class: link_class(active),
                href: "{item.href}",
                onclick: move |evt: MouseEvent| {
                    let mut state = state;
                    let target = state.with_mut(|nav| nav.click_anchor(&href).map(str::to_string));
                    if let Some(id) = target {
                        evt.prevent_default();
                        spawn(async move {
                            browser::scroll_to_section(&id).await;
                        });
                    }
                },
                {i18n.text(item.key, item.label)}
            }
        }
    }
}

/// Fixed top bar: logo, links with scroll-spy highlighting, mobile menu
/// toggle and the language selector.
#[component]
pub fn Navbar(items: Vec<NavItem>) -> Element {
    let config = use_site_config();
    let i18n = use_i18n();
    let mut state = use_signal(NavState::default);
    let nav_config = config.nav;

    use_future(move || async move {
        let mut spy = document::eval(SCROLL_SPY_JS);
        loop {
            match spy.recv::<ScrollSample>().await {
                Ok(sample) => {
                    let mut next = state.peek().clone();
                    next.observe_scroll(&sample, &nav_config);
                    if next != *state.peek() {
                        state.set(next);
                    }
                }
                Err(err) => {
                    debug!("navbar: scroll spy stopped: {err:?}");
                    break;
                }
            }
        }
    });

    let snapshot = state();

    rsx! {
        nav {
            id: "navbar",
            class: if snapshot.scrolled { "navbar scrolled" } else { "navbar" },
            div { class: "nav_inner",
                a {
                    class: "logo",
                    href: "/",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        spawn(browser::scroll_to_top());
                    },
                    "{config.site_name}"
                }
                button {
                    id: "navToggle",
                    class: "nav_toggle",
                    r#type: "button",
                    "aria-label": i18n.text("nav.menu", "Menu"),
                    "aria-expanded": "{snapshot.menu_open}",
                    onclick: move |_| state.with_mut(NavState::toggle_menu),
                    span {}
                    span {}
                    span {}
                }
                ul {
                    id: "navMenu",
                    class: if snapshot.menu_open { "nav_menu active" } else { "nav_menu" },
                    for item in items {
                        NavLink { key: "{item.href}", item, state }
                    }
                    li { class: "nav_language", LanguageSelector {} }
                }
            }
        }
    }
}
