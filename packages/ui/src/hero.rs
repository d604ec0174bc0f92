use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::debug;

use content::navigation::parallax_offset;

use crate::{use_i18n, use_site_config};

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

// Streams `scrollY` on every scroll event, replacing a listener left by an
// earlier mount.
const PARALLAX_JS: &str = r#"
const previous = window.__fermentierraParallax;
if (previous) window.removeEventListener("scroll", previous);
const send = () => dioxus.send(window.scrollY);
window.__fermentierraParallax = send;
window.addEventListener("scroll", send);
send();
"#;

#[component]
pub fn Hero() -> Element {
    let i18n = use_i18n();
    let config = use_site_config();
    let delay_ms = config.timings.hero_delay_ms;
    let rate = config.parallax_rate;
    let mut entered = use_signal(|| false);
    let mut offset = use_signal(|| 0.0_f64);

    // Content starts hidden and transitions in once the page has painted.
    use_future(move || async move {
        TimeoutFuture::new(delay_ms).await;
        entered.set(true);
    });

    use_future(move || async move {
        let mut scroll = document::eval(PARALLAX_JS);
        loop {
            match scroll.recv::<f64>().await {
                Ok(scroll_y) => offset.set(parallax_offset(scroll_y, rate)),
                Err(err) => {
                    debug!("hero: parallax stopped: {err:?}");
                    break;
                }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section {
            id: "hero",
            class: "hero",
            style: "transform: translateY({offset}px)",
            div { class: if entered() { "hero_content entered" } else { "hero_content" },
                p { class: "hero_kicker", {i18n.text("hero.kicker", "Fermentation artisanale")} }
                h1 { {i18n.text("hero.title", "Le goût vivant des ferments")} }
                p { class: "hero_subtitle",
                    {i18n.text("hero.subtitle", "Condiments, boissons et ateliers pour les chefs et les épiceries fines.")}
                }
                div { class: "cta_row",
                    a { class: "btn primary", href: "#products", {i18n.text("hero.cta_products", "Découvrir la gamme")} }
                    a { class: "btn", href: "#contact", {i18n.text("hero.cta_contact", "Nous contacter")} }
                }
            }
        }
    }
}
