//! Project card with an expandable details panel.

use dioxus::prelude::*;

use portfolio_core::content::{Icon, Project};

use crate::components::icon;

#[derive(Props, Clone, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

/// One portfolio project: cover image, tags, and a collapsed details panel
/// holding the highlight, feature list, and demo/code links.
///
/// The media block keeps a gradient backdrop, so a failed image load
/// degrades to a colored placeholder instead of a broken frame.
#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let mut expanded = use_signal(|| false);
    let project = props.project;

    rsx! {
        article { class: "project-card card",
            div { class: "project-media",
                if let Some(primary) = project.tags.first() {
                    span { class: "project-primary-tag", "{primary}" }
                }
                img {
                    src: project.image_url,
                    alt: project.title,
                    loading: "lazy",
                }
            }
            div { class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "muted", "{project.description}" }

                div { class: "tag-row",
                    for tag in project.tags {
                        span { class: "tag", "{tag}" }
                    }
                }

                button {
                    r#type: "button",
                    class: "link-btn",
                    onclick: move |_| expanded.set(!expanded()),
                    if expanded() { "Hide Details" } else { "View Details" }
                    if expanded() {
                        {icon(Icon::ChevronUp, 16)}
                    } else {
                        {icon(Icon::ChevronDown, 16)}
                    }
                }

                if expanded() {
                    div { class: "project-details",
                        div { class: "project-highlight",
                            p {
                                span { class: "strong", "Highlight: " }
                                "{project.highlight}"
                            }
                        }
                        h4 { class: "details-heading", "Key Features:" }
                        ul { class: "feature-list",
                            for feature in project.features {
                                li { "{feature}" }
                            }
                        }
                        div { class: "project-actions",
                            a {
                                href: project.demo_url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "btn btn-outline btn-sm",
                                "Live Demo "
                                {icon(Icon::ExternalLink, 14)}
                            }
                            a {
                                href: project.github_url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "btn btn-outline btn-sm",
                                "View Code "
                                {icon(Icon::Github, 14)}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::content::Project;

    #[test]
    fn card_renders_a_project_with_no_tags() {
        let project = Project {
            title: "Untagged",
            description: "A project with nothing in its tag list.",
            image_url: "",
            tags: &[],
            features: &[],
            highlight: "",
            demo_url: "",
            github_url: "",
            featured: false,
        };

        let mut dom =
            VirtualDom::new_with_props(ProjectCard, ProjectCardProps { project });
        // Must not panic on the missing primary tag
        dom.rebuild_in_place();
    }
}
