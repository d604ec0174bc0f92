use dioxus::prelude::*;
use tracing::{debug, info};

use content::contact::{CallbackRequest, Field};

use crate::use_i18n;

/// Floating "call me back" widget: a toggle button and the request panel.
#[component]
pub fn CallbackWidget() -> Element {
    let i18n = use_i18n();
    let mut open = use_signal(|| false);

    rsx! {
        div {
            class: if open() { "callback_widget open" } else { "callback_widget" },
            "data-callback-widget": "",
            button {
                class: "callback_toggle btn primary",
                r#type: "button",
                "aria-expanded": "{open}",
                onclick: move |_| {
                    let next = !open();
                    open.set(next);
                },
                {i18n.text("callback.toggle", "Être rappelé")}
            }
            if open() {
                CallbackPanel { on_close: move |_| open.set(false) }
            }
        }
    }
}

/// The request stays on the page: a valid submit only shows the
/// confirmation and clears the fields.
#[component]
fn CallbackPanel(on_close: EventHandler<()>) -> Element {
    let i18n = use_i18n();
    let mut request = use_signal(CallbackRequest::default);
    let mut validated = use_signal(|| false);
    let mut confirmed = use_signal(|| false);

    let current = request();
    let invalid = if validated() { current.validate() } else { Vec::new() };
    let name_invalid = invalid.contains(&Field::Name);
    let phone_invalid = invalid.contains(&Field::Phone);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        validated.set(true);
        let invalid = request.peek().validate();
        if !invalid.is_empty() {
            debug!("callback: {} invalid fields", invalid.len());
            return;
        }
        info!("callback: request confirmed");
        request.set(CallbackRequest::default());
        validated.set(false);
        confirmed.set(true);
    };

    rsx! {
        div { class: "callback_panel",
            button {
                class: "callback_close",
                r#type: "button",
                "aria-label": i18n.text("callback.close", "Fermer"),
                onclick: move |_| on_close.call(()),
                "×"
            }
            h2 { class: "callback_title", {i18n.text("callback.title", "Planifier un rappel")} }
            p { class: "hint", {i18n.text("callback.subtitle", "Nos équipes vous contactent dans l'heure ouvrée.")} }
            form {
                class: if validated() { "callback_form was-validated" } else { "callback_form" },
                novalidate: true,
                onsubmit,
                input {
                    name: "name",
                    required: true,
                    placeholder: i18n.text("callback.name", "Votre nom"),
                    value: "{current.name}",
                    "aria-invalid": if name_invalid { "true" } else { "false" },
                    oninput: move |e: FormEvent| {
                        confirmed.set(false);
                        request.with_mut(|r| r.name = e.value());
                    },
                }
                input {
                    name: "phone",
                    r#type: "tel",
                    required: true,
                    placeholder: i18n.text("callback.phone", "Votre téléphone"),
                    value: "{current.phone}",
                    "aria-invalid": if phone_invalid { "true" } else { "false" },
                    oninput: move |e: FormEvent| {
                        confirmed.set(false);
                        request.with_mut(|r| r.phone = e.value());
                    },
                }
                label { class: "hint", r#for: "callback-time",
                    {i18n.text("callback.time", "Créneau préféré")}
                }
                input {
                    id: "callback-time",
                    name: "time",
                    r#type: "datetime-local",
                    value: "{current.time}",
                    oninput: move |e: FormEvent| request.with_mut(|r| r.time = e.value()),
                }
                button { class: "btn primary", r#type: "submit",
                    {i18n.text("callback.submit", "Me rappeler")}
                }
            }
            if confirmed() {
                p { class: "callback_confirmation", role: "status",
                    {i18n.text("callback.confirmation", "Merci, nous vous rappelons rapidement.")}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;
    use content::MemorySource;

    #[tokio::test]
    async fn panel_asks_for_a_date_and_time() {
        let html = render(|| rsx! { CallbackPanel { on_close: |_| {} } }, MemorySource::new()).await;
        assert!(html.contains("type=\"datetime-local\""));
        assert!(html.contains("type=\"tel\""));
        assert!(html.contains("novalidate"));
    }

    #[tokio::test]
    async fn widget_starts_closed() {
        let html = render(|| rsx! { CallbackWidget {} }, MemorySource::new()).await;
        assert!(html.contains("data-callback-widget"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(!html.contains("callback_panel"));
    }
}
