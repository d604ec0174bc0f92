//! Rendering helpers for component tests.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;

use content::{MemorySource, SiteConfig};

use crate::{I18nProvider, SharedSource, ToastProvider};

#[derive(Clone, Copy)]
struct View(fn() -> Element);

#[component]
fn Harness() -> Element {
    let View(view) = use_context::<View>();
    rsx! {
        I18nProvider {
            ToastProvider { {view()} }
        }
    }
}

/// Render `view` against `source` and let its fetches settle.
pub(crate) async fn render(view: fn() -> Element, source: MemorySource) -> String {
    let mut dom = VirtualDom::new(Harness)
        .with_root_context(SiteConfig::default())
        .with_root_context(Rc::new(source) as SharedSource)
        .with_root_context(View(view));
    dom.rebuild_in_place();
    for _ in 0..10 {
        if tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work())
            .await
            .is_err()
        {
            break;
        }
        dom.render_immediate_to_vec();
    }
    dioxus_ssr::render(&dom)
}
