use dioxus::prelude::*;
use tracing::{error, info};

use content::SiteConfig;
use ui::NavItem;
use views::{Blog, CaseStudies, Contact, Home, NotFound, Product, Products, Training};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Home {},
    #[route("/products")]
    Products {},
    #[route("/product?:id")]
    Product { id: String },
    #[route("/case-studies")]
    CaseStudies {},
    #[route("/blog")]
    Blog {},
    #[route("/training")]
    Training {},
    #[route("/contact")]
    Contact {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        error!("panic: {info}");
    }));
}

fn log_runtime_config(config: &SiteConfig) {
    let languages: Vec<&str> = config.languages.iter().map(|l| l.code).collect();
    info!(
        "startup: site={} asset_base={} languages={} fallback={}",
        config.site_name,
        config.asset_base,
        languages.join(","),
        config.fallback_lang,
    );
    info!(
        "startup: storage_key={} reveal_selectors={}",
        config.storage_key,
        config.reveal.selectors.len(),
    );
}

/// Links shown in the navbar. Section anchors scroll in place on the home
/// page and navigate back to it from every other page.
fn nav_items(on_home: bool) -> Vec<NavItem> {
    let anchor = |id: &str| {
        if on_home {
            format!("#{id}")
        } else {
            format!("/#{id}")
        }
    };
    vec![
        NavItem::new(anchor("hero"), "nav.home", "Accueil"),
        NavItem::new(anchor("products"), "nav.products", "Produits"),
        NavItem::new(anchor("about"), "nav.about", "À propos"),
        NavItem::new("/case-studies", "nav.cases", "Références"),
        NavItem::new("/blog", "nav.blog", "Blog"),
        NavItem::new("/training", "nav.training", "Formations"),
        NavItem::new(anchor("contact"), "nav.contact", "Contact"),
    ]
}

#[component]
fn App() -> Element {
    let config = use_context_provider(SiteConfig::default);
    use_hook(|| log_runtime_config(&config));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SiteTheme {}
        ui::I18nProvider {
            ui::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Page shell shared by every route. The reveal observer is keyed on the
/// route so each page gets its own attach pass.
#[component]
fn SiteShell() -> Element {
    let route = use_route::<Route>();
    let items = nav_items(matches!(route, Route::Home {}));

    rsx! {
        ui::Navbar { items }
        main { class: "route_view", Outlet::<Route> {} }
        ui::Footer {}
        ui::CallbackWidget {}
        ui::RevealObserver { key: "{route}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_links_are_plain_anchors() {
        let items = nav_items(true);
        assert_eq!(items[0].href, "#hero");
        assert!(items.iter().any(|item| item.href == "/blog"));
    }

    #[test]
    fn other_pages_link_back_to_home_sections() {
        let items = nav_items(false);
        assert_eq!(items[1].href, "/#products");
        assert_eq!(items[6].href, "/#contact");
    }
}
