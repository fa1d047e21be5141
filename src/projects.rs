use dioxus::prelude::*;

use crate::content::{ContentStore, Project};

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    rsx! {
        div { class: "card",
            if !project.image.is_empty() {
                img {
                    class: "project-image",
                    src: "{project.image}",
                    alt: "{project.title}",
                }
            }
            h3 { class: "card-title", "{project.title}" }
            p { class: "card-subtitle", "{project.description}" }

            if !project.tech.is_empty() {
                div { class: "tech-chips",
                    for tech in project.tech.iter() {
                        span { class: "chip", "{tech}" }
                    }
                }
            }

            div { class: "card-links",
                if !project.link.is_empty() {
                    a { href: "{project.link}", target: "_blank", "Live site" }
                }
                if !project.repo.is_empty() {
                    a { href: "{project.repo}", target: "_blank", "Source" }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let content = use_context::<Signal<ContentStore>>();
    let projects = content.read().state().projects.clone();

    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Projects" }
            p { class: "page-subtitle", "Things I've built and shipped." }

            if projects.is_empty() {
                p { class: "empty-state", "Nothing here yet. Check back soon." }
            } else {
                div { class: "card-grid",
                    for project in projects {
                        ProjectCard { project }
                    }
                }
            }
        }
    }
}
