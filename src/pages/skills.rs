//! Skills page: category sections of hexagon tiles with a detail overlay.

use dioxus::prelude::*;

use portfolio_core::content::{self, Skill, SkillCategory};

use crate::components::icon;

#[component]
pub fn Skills() -> Element {
    // The selected tile, shown in a modal overlay until dismissed.
    let mut selected = use_signal(|| None::<Skill>);

    rsx! {
        div { class: "page skills",
            div { class: "section-inner",
                section { class: "page-head",
                    h1 { class: "page-title", "Skills & Expertise" }
                    p { class: "lead muted",
                        "A multidisciplinary toolkit spanning engineering, AI, product thinking, people, and communication."
                    }
                }

                for category in content::SKILL_CATEGORIES {
                    CategorySection {
                        category: *category,
                        on_select: move |skill| selected.set(Some(skill)),
                    }
                }
            }

            if let Some(skill) = selected() {
                div {
                    class: "modal-backdrop",
                    onclick: move |_| selected.set(None),
                    div { class: "modal-card",
                        h3 { "{skill.name}" }
                        p { class: "muted", "{skill.description}" }
                        button {
                            r#type: "button",
                            class: "btn btn-outline",
                            onclick: move |_| selected.set(None),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CategorySection(category: SkillCategory, on_select: EventHandler<Skill>) -> Element {
    let (from, to) = category.gradient;
    let accent = format!("linear-gradient(135deg, {from}, {to})");

    rsx! {
        section { class: "skill-category",
            div { class: "skill-category-head",
                span {
                    class: "skill-category-icon",
                    style: "background: {accent};",
                    {icon(category.icon, 22)}
                }
                h2 { class: "section-title", "{category.title}" }
            }
            div { class: "hex-grid",
                for skill in category.skills {
                    button {
                        r#type: "button",
                        class: "hex-tile",
                        style: "--tile-gradient: {accent};",
                        title: skill.description,
                        onclick: {
                            let skill = *skill;
                            move |_| on_select.call(skill)
                        },
                        span { class: "hex-label", "{skill.name}" }
                    }
                }
            }
        }
    }
}
