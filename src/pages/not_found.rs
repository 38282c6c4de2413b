//! Catch-all page for unmatched paths.

use dioxus::prelude::*;

use portfolio_core::content::Icon;

use crate::app::Route;
use crate::components::icon;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "page not-found",
            div { class: "section-inner centered",
                h1 { class: "not-found-code", "404" }
                h2 { "Page Not Found" }
                p { class: "muted", "No page exists at {path}." }
                Link { to: Route::Home {}, class: "btn btn-primary",
                    {icon(Icon::Home, 16)}
                    " Return to Home"
                }
            }
        }
    }
}
