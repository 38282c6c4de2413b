//! Home page: hero, overview highlights, featured projects, call to action.

use dioxus::prelude::*;

use portfolio_core::content::{self, Icon};

use crate::app::Route;
use crate::components::{icon, ProjectCard};

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page home",
            // Hero
            section { class: "hero",
                div { class: "hero-inner",
                    div { class: "hero-socials",
                        for link in content::SOCIAL_LINKS {
                            a {
                                href: link.url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "icon-btn round",
                                "aria-label": link.name,
                                {icon(link.icon, 22)}
                            }
                        }
                    }

                    div { class: "hero-content",
                        h1 { class: "hero-title", "Hi, I'm {content::OWNER_NAME}" }
                        p { class: "hero-role", "{content::ROLE}" }
                        p { class: "hero-intro muted", "{content::HERO_INTRO}" }

                        div { class: "hero-actions",
                            Link { to: Route::Contact {}, class: "btn btn-primary",
                                "Hire Me "
                                {icon(Icon::ArrowRight, 16)}
                            }
                            Link { to: Route::Projects {}, class: "btn btn-outline",
                                "View Projects"
                            }
                        }
                    }

                    div { class: "hero-portrait",
                        div { class: "portrait-frame",
                            span { class: "portrait-initials", "PW" }
                        }
                        div { class: "portrait-badge", "{content::YEARS_BADGE}" }
                    }
                }
            }

            // Overview
            section { class: "section section-alt",
                div { class: "section-inner",
                    div { class: "section-head",
                        h2 { class: "section-title", "Overview" }
                        p { class: "muted", "{content::OVERVIEW}" }
                    }
                    div { class: "card-grid three",
                        for highlight in content::HIGHLIGHTS {
                            div { class: "card highlight-card",
                                div { class: "highlight-icon", {icon(highlight.icon, 32)} }
                                h3 { "{highlight.title}" }
                                p { class: "muted", "{highlight.description}" }
                            }
                        }
                    }
                }
            }

            // Featured projects
            section { class: "section",
                div { class: "section-inner",
                    div { class: "section-head",
                        h2 { class: "section-title", "Featured Projects" }
                        p { class: "muted",
                            "Explore some of my recent work that showcases my expertise in full-stack development and AI integration."
                        }
                    }
                    div { class: "card-grid three",
                        for project in content::featured_projects() {
                            ProjectCard { project: *project }
                        }
                    }
                }
            }

            // Call to action
            section { class: "section",
                div { class: "section-inner",
                    div { class: "cta-panel",
                        h2 { class: "section-title", "Ready to Start Your Project?" }
                        p { class: "muted",
                            "Let's collaborate to bring your ideas to life with cutting-edge technology and exceptional design."
                        }
                        Link { to: Route::Contact {}, class: "btn btn-primary",
                            "Get in Touch "
                            {icon(Icon::ArrowRight, 16)}
                        }
                    }
                }
            }
        }
    }
}
