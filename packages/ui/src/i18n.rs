use dioxus::prelude::*;
use tracing::{debug, info};

use content::i18n::{fetch_translations, initial_language, normalize_lang};
use content::Dictionary;

use crate::{browser, use_asset_source};

const COLLECT_KEYS_JS: &str = r#"return Array.from(document.querySelectorAll("[data-i18n]"))
    .map((node) => node.getAttribute("data-i18n") || "");"#;

/// Current language and dictionary, shared through context.
///
/// Components read through [`I18n::text`] (which subscribes them to
/// dictionary changes); the only write path is [`I18n::switch_language`].
#[derive(Clone, Copy, PartialEq)]
pub struct I18n {
    lang: Signal<String>,
    dictionary: Signal<Dictionary>,
    storage_key: &'static str,
}

impl I18n {
    pub fn lang(&self) -> String {
        (self.lang)()
    }

    /// Translated text for `key`, or `default` when the key does not resolve.
    pub fn text(&self, key: &str, default: &str) -> String {
        self.dictionary.read().text_or(key, default)
    }

    /// The dictionary as of now, without subscribing the caller.
    pub fn snapshot(&self) -> Dictionary {
        self.dictionary.peek().clone()
    }

    /// Persist the preference and load the new dictionary. The previous
    /// dictionary stays in place until the new one arrives, then is replaced
    /// as a whole.
    pub fn switch_language(&self, code: &str) {
        let Some(code) = normalize_lang(code) else {
            debug!("i18n: ignoring language code {code:?}");
            return;
        };
        info!("i18n: switching to {code}");
        browser::store(self.storage_key, &code);
        let mut lang = self.lang;
        lang.set(code);
    }
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>()
}

/// Write `dictionary` into every DOM node tagged `data-i18n` whose key
/// resolves to a string, with a short fade. Other nodes are untouched.
pub(crate) async fn apply_translations(dictionary: &Dictionary) {
    let keys: Vec<String> = browser::query(COLLECT_KEYS_JS).await.unwrap_or_default();
    let updates = dictionary.updates_for(keys.iter().map(String::as_str));
    if updates.is_empty() {
        return;
    }
    let Ok(payload) = serde_json::to_string(&updates) else {
        return;
    };
    let js = format!(
        r#"const updates = new Map({payload});
        document.querySelectorAll("[data-i18n]").forEach((node) => {{
          const text = updates.get(node.getAttribute("data-i18n"));
          if (typeof text !== "string") return;
          node.style.opacity = "0";
          requestAnimationFrame(() => {{
            node.textContent = text;
            node.style.opacity = "1";
          }});
        }});
        return "";"#
    );
    browser::run(&js).await;
}

/// Provide [`I18n`] to the tree. The initial language is the stored
/// preference, then the document language, then the fallback.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let config = crate::use_site_config();
    let source = use_asset_source();
    let storage_key = config.storage_key;
    let lang = use_signal(|| {
        initial_language(
            browser::stored(storage_key).as_deref(),
            browser::document_lang().as_deref(),
            &config,
        )
    });
    let mut dictionary = use_signal(Dictionary::empty);
    use_context_provider(|| I18n {
        lang,
        dictionary,
        storage_key,
    });

    // Keyed on the language: a newer switch cancels an in-flight fetch.
    let loaded = use_resource(move || {
        let code = lang();
        let config = config.clone();
        let source = source.clone();
        async move { fetch_translations(&*source, &config, &code).await }
    });

    use_effect(move || {
        browser::set_document_lang(&lang());
    });

    use_effect(move || {
        if let Some(next) = loaded() {
            dictionary.set(next);
        }
    });

    // Markup injected outside the virtual DOM (includes) is translated here.
    use_effect(move || {
        let current = dictionary();
        spawn(async move {
            apply_translations(&current).await;
        });
    });

    rsx! { {children} }
}

fn option_class(active: bool) -> &'static str {
    if active {
        "dropdown_item active"
    } else {
        "dropdown_item"
    }
}

#[component]
pub fn LanguageSelector() -> Element {
    let config = crate::use_site_config();
    let i18n = use_i18n();
    let current = i18n.lang();
    let mut open = use_signal(|| false);

    rsx! {
        div { id: "languageDropdown", class: "language_selector",
            button {
                class: "btn language_toggle",
                r#type: "button",
                "aria-expanded": "{open}",
                onclick: move |_| {
                    let next = !open();
                    open.set(next);
                },
                span { class: "hint", {i18n.text("language.label", "Langue")} }
                span { class: "language_current", "{current.to_uppercase()}" }
            }
            if open() {
                div { class: "dropdown",
                    for option in config.languages.iter().copied() {
                        button {
                            key: "{option.code}",
                            class: option_class(option.code == current),
                            r#type: "button",
                            "data-language": option.code,
                            onclick: move |_| {
                                i18n.switch_language(option.code);
                                open.set(false);
                            },
                            "{option.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_language_is_highlighted() {
        assert_eq!(option_class(true), "dropdown_item active");
        assert_eq!(option_class(false), "dropdown_item");
    }
}
