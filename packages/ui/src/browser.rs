//! Thin bridge to browser APIs. Async helpers go through `document::eval`
//! so they work in every renderer; local storage and the `<html lang>`
//! attribute use `web-sys` directly on wasm.

use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use tracing::debug;

use content::navigation::scroll_target;

/// Encode `value` as a JS string literal.
pub(crate) fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Run a script, ignoring its result. Failures are logged only.
pub(crate) async fn run(js: &str) {
    if let Err(err) = document::eval(js).await {
        debug!("browser: script failed: {err:?}");
    }
}

/// Run a script and decode its return value.
pub(crate) async fn query<T: DeserializeOwned>(js: &str) -> Option<T> {
    match document::eval(js).await {
        Ok(value) => serde_json::from_value(value).ok(),
        Err(err) => {
            debug!("browser: query failed: {err:?}");
            None
        }
    }
}

pub(crate) async fn scroll_to(top: f64) {
    run(&format!(
        "window.scrollTo({{ top: {top}, behavior: \"smooth\" }}); return \"\";"
    ))
    .await;
}

pub(crate) async fn scroll_to_top() {
    scroll_to(0.0).await;
}

/// Smooth-scroll so section `id` lands just below the navbar. No-op when
/// the page has no such section.
pub(crate) async fn scroll_to_section(id: &str) {
    let js = format!(
        r#"const el = document.getElementById({id});
        if (!el) return null;
        const nav = document.getElementById("navbar");
        return [el.offsetTop, nav ? nav.offsetHeight : 0];"#,
        id = js_string(id)
    );
    if let Some(Some((top, nav_height))) = query::<Option<(f64, f64)>>(&js).await {
        scroll_to(scroll_target(top, nav_height)).await;
    }
}

pub(crate) async fn open_url(url: &str) {
    run(&format!("window.open({}); return \"\";", js_string(url))).await;
}

pub(crate) async fn location_search() -> String {
    query::<String>("return window.location.search || \"\";")
        .await
        .unwrap_or_default()
}

pub(crate) async fn current_year() -> Option<i32> {
    query::<i32>("return new Date().getFullYear();").await
}

#[cfg(target_arch = "wasm32")]
mod dom {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn root() -> Option<web_sys::Element> {
        web_sys::window()?.document()?.document_element()
    }

    pub(crate) fn stored(key: &str) -> Option<String> {
        storage()?.get_item(key).ok()?
    }

    pub(crate) fn store(key: &str, value: &str) {
        if let Some(storage) = storage() {
            if storage.set_item(key, value).is_err() {
                tracing::debug!("browser: could not persist {key}");
            }
        }
    }

    pub(crate) fn document_lang() -> Option<String> {
        root()?.get_attribute("lang")
    }

    pub(crate) fn set_document_lang(code: &str) {
        if let Some(root) = root() {
            if root.set_attribute("lang", code).is_err() {
                tracing::debug!("browser: could not set document lang to {code}");
            }
        }
    }
}

// Outside the browser there is no storage and no document to tag.
#[cfg(not(target_arch = "wasm32"))]
mod dom {
    pub(crate) fn stored(_key: &str) -> Option<String> {
        None
    }

    pub(crate) fn store(_key: &str, _value: &str) {}

    pub(crate) fn document_lang() -> Option<String> {
        None
    }

    pub(crate) fn set_document_lang(_code: &str) {}
}

pub(crate) use dom::{document_lang, set_document_lang, store, stored};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_quotes_and_escapes() {
        assert_eq!(js_string("products"), "\"products\"");
        assert_eq!(js_string("a\"b\\c"), r#""a\"b\\c""#);
        assert_eq!(js_string("</script>"), "\"</script>\"");
    }

    #[test]
    fn document_access_is_inert_off_the_browser() {
        set_document_lang("en");
        store("lang", "en");
        assert_eq!(document_lang(), None);
        assert_eq!(stored("lang"), None);
    }
}
