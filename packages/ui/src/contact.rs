use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::{debug, info};

use content::contact::{ContactSubmission, Field};

use crate::{browser, use_i18n, use_site_config};

/// Interest options, in display order: value, dictionary key, default label.
const INTERESTS: [(&str, &str, &str); 5] = [
    ("tasting", "contact.interest.tasting", "Dégustation"),
    ("subscription", "contact.interest.subscription", "Abonnement"),
    ("cocreation", "contact.interest.cocreation", "Co-création"),
    ("training", "contact.interest.training", "Formation"),
    ("quote", "contact.interest.quote", "Devis"),
];

fn form_class(validated: bool) -> &'static str {
    if validated {
        "contact_form was-validated"
    } else {
        "contact_form"
    }
}

/// Contact form that hands the message to the visitor's mail client,
/// addressed to the mailbox matching the chosen interest.
#[component]
pub fn ContactForm() -> Element {
    let i18n = use_i18n();
    let reset_ms = use_site_config().timings.contact_reset_ms;
    let mut form = use_signal(ContactSubmission::default);
    let mut validated = use_signal(|| false);
    let mut sent = use_signal(|| false);

    let current = form();
    let invalid = if validated() { current.validate() } else { Vec::new() };
    let flag = move |field: Field| if invalid.contains(&field) { "true" } else { "false" };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        validated.set(true);
        let submission = form.peek().clone();
        let invalid = submission.validate();
        if !invalid.is_empty() {
            let names: Vec<_> = invalid.iter().map(|field| field.name()).collect();
            debug!("contact: invalid fields {names:?}");
            return;
        }
        let uri = submission.mailto_uri();
        info!("contact: opening mail client for {}", submission.mailbox());
        sent.set(true);
        spawn(async move {
            browser::open_url(&uri).await;
            TimeoutFuture::new(reset_ms).await;
            form.set(ContactSubmission::default());
            validated.set(false);
            sent.set(false);
        });
    };

    if sent() {
        return rsx! {
            div { class: "success_message", "data-success-message": "", role: "status",
                h3 { {i18n.text("contact.success.title", "Merci !")} }
                p { {i18n.text("contact.success.body", "Votre messagerie s'ouvre avec votre demande. Nous revenons vers vous très vite.")} }
            }
        };
    }

    rsx! {
        form {
            class: form_class(validated()),
            novalidate: true,
            onsubmit,
            div { class: "form_row",
                label { r#for: "contact-name", {i18n.text("contact.name", "Nom")} }
                input {
                    id: "contact-name",
                    name: "name",
                    required: true,
                    value: "{current.name}",
                    "aria-invalid": flag(Field::Name),
                    oninput: move |e: FormEvent| form.with_mut(|f| f.name = e.value()),
                }
            }
            div { class: "form_row",
                label { r#for: "contact-establishment", {i18n.text("contact.establishment", "Établissement")} }
                input {
                    id: "contact-establishment",
                    name: "establishment",
                    value: "{current.establishment}",
                    oninput: move |e: FormEvent| form.with_mut(|f| f.establishment = e.value()),
                }
            }
            div { class: "form_row",
                label { r#for: "contact-email", {i18n.text("contact.email", "Email")} }
                input {
                    id: "contact-email",
                    name: "email",
                    r#type: "email",
                    required: true,
                    value: "{current.email}",
                    "aria-invalid": flag(Field::Email),
                    oninput: move |e: FormEvent| form.with_mut(|f| f.email = e.value()),
                }
            }
            div { class: "form_row",
                label { r#for: "contact-phone", {i18n.text("contact.phone", "Téléphone")} }
                input {
                    id: "contact-phone",
                    name: "phone",
                    r#type: "tel",
                    value: "{current.phone}",
                    oninput: move |e: FormEvent| form.with_mut(|f| f.phone = e.value()),
                }
            }
            div { class: "form_row",
                label { r#for: "contact-interest", {i18n.text("contact.interest.label", "Votre projet")} }
                select {
                    id: "contact-interest",
                    name: "interest",
                    required: true,
                    value: "{current.interest}",
                    "aria-invalid": flag(Field::Interest),
                    onchange: move |e: FormEvent| form.with_mut(|f| f.interest = e.value()),
                    option { value: "", {i18n.text("contact.interest.placeholder", "Choisir…")} }
                    for (value, key, label) in INTERESTS {
                        option { key: "{value}", value, selected: current.interest == value, {i18n.text(key, label)} }
                    }
                }
            }
            div { class: "form_row",
                label { r#for: "contact-message", {i18n.text("contact.message", "Message")} }
                textarea {
                    id: "contact-message",
                    name: "message",
                    rows: "5",
                    value: "{current.message}",
                    oninput: move |e: FormEvent| form.with_mut(|f| f.message = e.value()),
                }
            }
            button { class: "btn primary", r#type: "submit", {i18n.text("contact.submit", "Envoyer")} }
        }
    }
}
