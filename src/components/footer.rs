//! Site footer: identity blurb, quick links, contact details, socials.

use chrono::Datelike;
use dioxus::prelude::*;

use portfolio_core::content;
use portfolio_core::routes::RouteTable;

use crate::app::Route;
use crate::components::icon;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();
    let table = RouteTable::new();

    rsx! {
        footer { class: "footer",
            div { class: "footer-inner",
                div { class: "footer-grid",
                    div { class: "footer-about",
                        Link { to: Route::Home {}, class: "footer-brand", "{content::OWNER_NAME}" }
                        p { class: "footer-blurb",
                            "Full Stack AI Developer specializing in creating dynamic, intelligent web experiences with precision and innovation."
                        }
                        div { class: "footer-socials",
                            for link in content::SOCIAL_LINKS {
                                a {
                                    href: link.url,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "icon-btn",
                                    "aria-label": link.name,
                                    {icon(link.icon, 18)}
                                }
                            }
                        }
                    }

                    div {
                        h3 { class: "footer-heading", "Quick Links" }
                        ul { class: "footer-list",
                            for entry in table.entries() {
                                li {
                                    Link {
                                        to: Route::for_page(entry.page),
                                        class: "footer-link",
                                        "{entry.page.label()}"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        h3 { class: "footer-heading", "Contact" }
                        ul { class: "footer-list",
                            li { "{content::LOCATION}" }
                            li { "{content::EMAIL}" }
                            li { "{content::PHONE}" }
                        }
                    }
                }

                div { class: "footer-bottom",
                    p { "\u{a9} {year} {content::OWNER_NAME}. All rights reserved." }
                }
            }
        }
    }
}
