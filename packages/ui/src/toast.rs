use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Error,
    Success,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub body: Option<String>,
    pub kind: ToastKind,
}

#[derive(Clone, Copy)]
pub struct Toasts {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn push(&self, title: String, body: Option<String>, kind: ToastKind) -> u64 {
        let mut next_id = self.next_id;
        let id = *next_id.peek();
        next_id.set(id + 1);
        let toast = Toast {
            id,
            title,
            body,
            kind,
        };
        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.push(toast));
        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.retain(|toast| toast.id != id));
    }

    /// A toast that stays until the visitor dismisses it.
    pub fn error(&self, title: String, body: Option<String>) {
        self.push(title, body, ToastKind::Error);
    }

    /// Show a toast that dismisses itself after `ms` milliseconds.
    pub fn flash(&self, title: String, kind: ToastKind, ms: u32) {
        let id = self.push(title, None, kind);
        let toasts = *self;
        spawn(async move {
            TimeoutFuture::new(ms).await;
            toasts.dismiss(id);
        });
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

fn kind_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Error => "toast toast_error",
        ToastKind::Success => "toast toast_success",
    }
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 1_u64);
    let ctx = use_context_provider(|| Toasts { toasts, next_id });

    rsx! {
        {children}
        ToastViewport { toasts: ctx.toasts }
    }
}

#[component]
fn ToastViewport(toasts: Signal<Vec<Toast>>) -> Element {
    let i18n = crate::use_i18n();
    let items = toasts();
    rsx! {
        div {
            class: "toast_region",
            role: "status",
            "aria-live": "polite",
            "data-cart-toast": "",
            for toast in items.iter() {
                div { key: "{toast.id}", class: kind_class(toast.kind),
                    div { class: "toast_content",
                        div { class: "toast_title", "{toast.title}" }
                        if let Some(body) = &toast.body {
                            div { class: "toast_body", "{body}" }
                        }
                    }
                    button {
                        class: "toast_close",
                        r#type: "button",
                        onclick: {
                            let id = toast.id;
                            let mut toasts = toasts;
                            move |_| {
                                toasts.with_mut(|items| items.retain(|t| t.id != id));
                            }
                        },
                        {i18n.text("toast.dismiss", "Fermer")}
                    }
                }
            }
        }
    }
}
