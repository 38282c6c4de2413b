use std::sync::Arc;

use dioxus::prelude::*;

use portfolio_core::routes::Page;
use portfolio_core::theme::{FileThemeStorage, Theme, ThemeStore};

use crate::components::{Footer, Navbar, PageTransition, ScrollToTop};
use crate::context::system_theme_hint;
use crate::pages::{About, Blog, Contact, Home, NotFound, Projects, Skills};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// One route per page, exact paths only, with a catch-all that renders the
/// 404 page. Everything is wrapped in the [`Shell`] layout: navbar, footer,
/// scroll reset, and the page-transition wrapper.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/projects")]
    Projects {},
    #[route("/skills")]
    Skills {},
    #[route("/contact")]
    Contact {},
    #[route("/blog")]
    Blog {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The route for a resolved page. The fallback maps to an empty
    /// catch-all, which only matters for links back out of the 404 page.
    pub fn for_page(page: Page) -> Route {
        match page {
            Page::Home => Route::Home {},
            Page::About => Route::About {},
            Page::Projects => Route::Projects {},
            Page::Skills => Route::Skills {},
            Page::Contact => Route::Contact {},
            Page::Blog => Route::Blog {},
            Page::NotFound => Route::NotFound {
                segments: Vec::new(),
            },
        }
    }
}

/// Root application component.
///
/// Provides global styles, the theme store, and routing.
#[component]
pub fn App() -> Element {
    // One theme store for the whole session, resolved from the persisted
    // preference, then the configured default, then the system hint.
    let store: Arc<ThemeStore> = use_hook(|| {
        Arc::new(ThemeStore::open(
            FileThemeStorage::new(crate::get_data_dir()),
            Some(Theme::Dark),
            system_theme_hint(),
        ))
    });

    let theme: Signal<Theme> = use_signal(|| store.get());

    use_context_provider(|| store);
    use_context_provider(|| theme);

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "app-root",
            "data-theme": theme().as_str(),
            Router::<Route> {}
        }
    }
}

/// Persistent chrome around every routed page.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();

    rsx! {
        Navbar {}
        main { class: "site-main",
            PageTransition { path: path.clone() }
        }
        Footer {}
        ScrollToTop { path }
    }
}
