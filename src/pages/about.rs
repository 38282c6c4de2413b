//! About page: bio, resume downloads, career timeline, core values.

use dioxus::prelude::*;

use portfolio_core::content::{self, Icon};

use crate::components::icon;

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "page about",
            div { class: "section-inner",
                // Bio
                section { class: "page-head",
                    h1 { class: "page-title", "About Me" }
                    p { class: "lead muted",
                        "I'm {content::OWNER_NAME}, a passionate Full Stack AI Developer with a rich background in building engaging, intelligent digital experiences. My journey spans from early coding challenges to leading innovative projects with my talented freelancing team."
                    }
                    p { class: "muted",
                        "I believe in continuous learning, creativity, and delivering excellence. With expertise in both front-end and back-end development, coupled with AI integration capabilities, I help businesses transform their digital presence."
                    }
                }

                // Resume downloads
                section { class: "card resume-card",
                    h2 { class: "section-title", "My Resume" }
                    p { class: "muted", "Download my resume tailored to different professional roles:" }
                    div { class: "resume-actions",
                        for resume in content::RESUMES {
                            a {
                                href: resume.href,
                                download: true,
                                class: "btn btn-outline",
                                {icon(Icon::FileText, 18)}
                                " {resume.label} "
                                {icon(Icon::Download, 14)}
                            }
                        }
                    }
                }

                // Timeline
                section { class: "timeline-section",
                    h2 { class: "section-title", "My Journey" }
                    div { class: "timeline",
                        for entry in content::TIMELINE {
                            div { class: "timeline-entry",
                                div { class: "timeline-dot", {icon(entry.icon, 22)} }
                                div { class: "timeline-body",
                                    span { class: "timeline-year muted", "{entry.year}" }
                                    h3 { "{entry.title}" }
                                    p { class: "muted", "{entry.description}" }
                                }
                            }
                        }
                    }
                }

                // Values
                section {
                    h2 { class: "section-title", "Core Values" }
                    div { class: "card-grid three",
                        for value in content::VALUES {
                            div { class: "card value-card",
                                div { class: "value-icon", {icon(value.icon, 24)} }
                                h3 { "{value.title}" }
                                p { class: "muted", "{value.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
