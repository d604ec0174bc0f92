//! Reveal-on-scroll: one shared `IntersectionObserver` that fades elements
//! in the first time they enter the viewport.

use dioxus::prelude::*;

use content::config::RevealConfig;

use crate::browser;

/// Script that creates the observer on first use and attaches it to every
/// matching element not already seen. Safe to run any number of times.
pub(crate) fn reveal_script(config: &RevealConfig) -> String {
    let selector = browser::js_string(&config.selectors.join(", "));
    let root_margin = browser::js_string(config.root_margin);
    format!(
        r#"if (!("IntersectionObserver" in window)) return "";
        let state = window.__fermentierraReveal;
        if (!state) {{
          const observer = new IntersectionObserver((entries) => {{
            entries.forEach((entry) => {{
              if (!entry.isIntersecting) return;
              entry.target.classList.add("visible");
              observer.unobserve(entry.target);
            }});
          }}, {{ threshold: {threshold}, rootMargin: {root_margin} }});
          state = {{ observer, seen: new WeakSet() }};
          window.__fermentierraReveal = state;
        }}
        document.querySelectorAll({selector}).forEach((el) => {{
          if (state.seen.has(el)) return;
          state.seen.add(el);
          el.classList.add("fade-in");
          state.observer.observe(el);
        }});
        return "";"#,
        threshold = config.threshold,
    )
}

/// Attach the observer to elements rendered since the last pass.
pub(crate) async fn refresh(config: &RevealConfig) {
    browser::run(&reveal_script(config)).await;
}

/// Runs the first attach pass once the page shell is mounted. Catalog views
/// call [`refresh`] again after their items render.
#[component]
pub fn RevealObserver() -> Element {
    let config = crate::use_site_config();
    use_effect(move || {
        let reveal = config.reveal.clone();
        spawn(async move {
            refresh(&reveal).await;
        });
    });
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::SiteConfig;

    #[test]
    fn script_carries_observer_options() {
        let js = reveal_script(&SiteConfig::default().reveal);
        assert!(js.contains("threshold: 0.1"));
        assert!(js.contains(r#"rootMargin: "0px 0px -50px 0px""#));
        assert!(js.contains(".advantage-card, .product-card"));
        assert!(js.contains(".blog-card\""));
    }

    #[test]
    fn script_is_guarded_against_double_attach() {
        let js = reveal_script(&SiteConfig::default().reveal);
        assert!(js.contains("if (!state)"));
        assert!(js.contains("state.seen.has(el)"));
    }
}
