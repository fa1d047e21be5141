use dioxus::prelude::*;

use crate::content::{ContentStore, Skill};

#[derive(Clone, PartialEq, Props)]
struct SkillGroupProps {
    heading: String,
    skills: Vec<Skill>,
}

#[component]
fn SkillGroup(props: SkillGroupProps) -> Element {
    rsx! {
        div { class: "skill-group",
            h2 { style: "font-size: 1.25rem; margin-bottom: var(--space-4);", "{props.heading}" }
            for skill in props.skills.iter() {
                div { class: "skill-row",
                    div { class: "skill-row-head",
                        span { "{skill.name}" }
                        span { "{skill.level}%" }
                    }
                    div { class: "skill-bar",
                        div {
                            class: "skill-bar-fill",
                            style: "width: {skill.level.min(100)}%;",
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    let content = use_context::<Signal<ContentStore>>();
    let (intro, skills) = {
        let store = content.read();
        (
            store.state().skills_content.clone(),
            store.state().skills.clone(),
        )
    };

    rsx! {
        div { class: "page",
            h1 { class: "page-title", "{intro.title}" }
            p { class: "page-subtitle", "{intro.subtitle}" }

            SkillGroup { heading: "Technical".to_owned(), skills: skills.technical }
            SkillGroup { heading: "Soft Skills".to_owned(), skills: skills.soft }
        }
    }
}
