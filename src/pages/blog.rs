//! Blog page. Posts are not wired up yet, so this renders a placeholder.

use dioxus::prelude::*;

use portfolio_core::content::Icon;

use crate::components::icon;

#[component]
pub fn Blog() -> Element {
    rsx! {
        div { class: "page blog",
            div { class: "section-inner",
                section { class: "page-head",
                    h1 { class: "page-title", "Blog" }
                    p { class: "lead muted",
                        "Thoughts on full-stack development, AI, and building products."
                    }
                }

                div { class: "empty-state",
                    {icon(Icon::PenTool, 48)}
                    h2 { "Coming Soon" }
                    p { class: "muted",
                        "I'm working on articles about AI integration, web development, and lessons from freelancing. Check back soon."
                    }
                }
            }
        }
    }
}
