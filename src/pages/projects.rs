//! Projects page with a live search filter over the project table.

use dioxus::prelude::*;

use portfolio_core::content::{self, Icon};

use crate::components::{icon, ProjectCard};

/// Case-insensitive match against title, description, and tags.
fn matches(project: &content::Project, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    project.title.to_lowercase().contains(&query)
        || project.description.to_lowercase().contains(&query)
        || project
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&query))
}

#[component]
pub fn Projects() -> Element {
    let mut query = use_signal(String::new);

    let visible: Vec<&'static content::Project> = content::PROJECTS
        .iter()
        .filter(|p| matches(p, query().trim()))
        .collect();

    rsx! {
        div { class: "page projects",
            div { class: "section-inner",
                section { class: "page-head",
                    h1 { class: "page-title", "My Projects" }
                    p { class: "lead muted",
                        "A collection of projects showcasing full-stack development, AI integration, and real-world problem solving."
                    }
                }

                div { class: "search-bar",
                    span { class: "search-icon", {icon(Icon::Search, 18)} }
                    input {
                        class: "input search-input",
                        placeholder: "Search projects by name, description, or technology...",
                        value: "{query}",
                        oninput: move |e| query.set(e.value()),
                    }
                }

                if visible.is_empty() {
                    div { class: "empty-state",
                        p { class: "muted", "No projects match \"{query}\"." }
                        button {
                            r#type: "button",
                            class: "btn btn-outline",
                            onclick: move |_| query.set(String::new()),
                            "Clear search"
                        }
                    }
                } else {
                    div { class: "card-grid two",
                        for project in visible {
                            ProjectCard { project: *project }
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

    #[test]
    fn empty_query_matches_everything() {
        assert!(content::PROJECTS.iter().all(|p| matches(p, "")));
    }

    #[test]
    fn tag_search_is_case_insensitive() {
        let hits = content::PROJECTS
            .iter()
            .filter(|p| matches(p, "mongodb"))
            .count();
        assert!(hits > 0);
    }

    #[test]
    fn nonsense_query_matches_nothing() {
        assert!(!content::PROJECTS.iter().any(|p| matches(p, "zzzzqqqq")));
    }
}
