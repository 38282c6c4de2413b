//! Navigation bar.
//!
//! Fixed header with the site title, one link per defined route with an
//! active-link underline, the theme toggle, and a burger menu on narrow
//! windows.

use dioxus::prelude::*;

use portfolio_core::content::{self, Icon};
use portfolio_core::routes::RouteTable;
use portfolio_core::theme::Theme;

use crate::app::Route;
use crate::components::icon;
use crate::context::{use_theme, use_theme_store};

#[component]
pub fn Navbar() -> Element {
    let store = use_theme_store();
    let mut theme = use_theme();
    let mut menu_open = use_signal(|| false);
    let current = use_route::<Route>();

    let toggle_theme = move |_| {
        let next = store.toggle();
        theme.set(next);
    };

    let table = RouteTable::new();

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                Link { to: Route::Home {}, class: "navbar-brand", "{content::OWNER_NAME}" }

                // Desktop links
                div { class: "navbar-links",
                    for entry in table.entries() {
                        Link {
                            to: Route::for_page(entry.page),
                            class: if Route::for_page(entry.page) == current {
                                "nav-link active"
                            } else {
                                "nav-link"
                            },
                            "{entry.page.label()}"
                        }
                    }
                    button {
                        r#type: "button",
                        class: "icon-btn theme-toggle",
                        "aria-label": "Toggle theme",
                        onclick: toggle_theme,
                        if theme() == Theme::Light {
                            {icon(Icon::Sun, 18)}
                        } else {
                            {icon(Icon::Moon, 18)}
                        }
                    }
                }

                // Burger (narrow windows only, via CSS)
                button {
                    r#type: "button",
                    class: "icon-btn navbar-burger",
                    "aria-label": "Toggle menu",
                    "aria-expanded": "{menu_open()}",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() {
                        {icon(Icon::X, 20)}
                    } else {
                        {icon(Icon::Menu, 20)}
                    }
                }
            }

            if menu_open() {
                div { class: "navbar-menu",
                    for entry in table.entries() {
                        Link {
                            to: Route::for_page(entry.page),
                            class: "navbar-menu-link",
                            onclick: move |_| menu_open.set(false),
                            "{entry.page.label()}"
                        }
                    }
                }
            }
        }
    }
}
