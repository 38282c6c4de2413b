//! Contact page: channel cards plus the message form.

use dioxus::prelude::*;

use portfolio_core::content;

use crate::components::{icon, ContactForm};

#[component]
pub fn Contact() -> Element {
    rsx! {
        div { class: "page contact",
            div { class: "section-inner",
                section { class: "page-head",
                    h1 { class: "page-title", "Get In Touch" }
                    p { class: "lead muted",
                        "Have a project in mind or want to collaborate? I'd love to hear from you."
                    }
                }

                div { class: "contact-layout",
                    div { class: "contact-channels",
                        for channel in content::CONTACT_CHANNELS {
                            a {
                                href: channel.link,
                                target: if channel.link.starts_with("http") { "_blank" },
                                class: "card channel-card",
                                div { class: "channel-icon", {icon(channel.icon, 24)} }
                                div {
                                    h3 { "{channel.title}" }
                                    p { class: "muted", "{channel.value}" }
                                }
                            }
                        }
                    }

                    ContactForm {}
                }
            }
        }
    }
}
