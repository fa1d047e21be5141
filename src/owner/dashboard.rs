use dioxus::prelude::*;

use crate::components::modal::ModalBox;
use crate::content::ContentStore;

use super::editors::{
    AboutEditor, CertificatesEditor, ContactEditor, GalleryEditor, HomeEditor, ProjectsEditor,
    SkillsEditor, SocialEditor, ThemeEditor,
};
use super::staging::StagingBuffer;

#[derive(Clone, Copy, PartialEq)]
enum EditorTab {
    Home,
    About,
    Skills,
    Projects,
    Certificates,
    Gallery,
    Social,
    Contact,
    Theme,
}

const TABS: &[(EditorTab, &str)] = &[
    (EditorTab::Home, "Home"),
    (EditorTab::About, "About"),
    (EditorTab::Skills, "Skills"),
    (EditorTab::Projects, "Projects"),
    (EditorTab::Certificates, "Certificates"),
    (EditorTab::Gallery, "Gallery"),
    (EditorTab::Social, "Social"),
    (EditorTab::Contact, "Contact"),
    (EditorTab::Theme, "Theme"),
];

#[component]
pub fn Dashboard() -> Element {
    let mut content = use_context::<Signal<ContentStore>>();
    let mut staging = use_signal(|| StagingBuffer::new(content.read().state().clone()));
    let mut tab = use_signal(|| EditorTab::Home);

    let dirty = staging.read().dirty();

    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Content Dashboard" }
            p { class: "page-subtitle",
                "Edits stage locally; nothing is stored until you save. Project, \
                 certificate, and social changes apply immediately."
            }

            div { class: "dashboard-bar",
                if dirty {
                    span { class: "dirty-flag", "\u{25CF} Unsaved changes" }
                } else {
                    span { class: "status-message", "All changes saved" }
                }
                button {
                    class: "btn btn-secondary btn-sm",
                    disabled: !dirty,
                    onclick: move |_| {
                        let snapshot = { content.read().state().clone() };
                        staging.write().discard(snapshot);
                    },
                    "Discard"
                }
                button {
                    class: "btn btn-primary btn-sm",
                    disabled: !dirty,
                    onclick: move |_| {
                        let mut store = content.write();
                        staging.write().commit(&mut store);
                    },
                    "Save"
                }
            }

            div { class: "editor-tabs",
                for (value, label) in TABS.iter() {
                    button {
                        class: if tab() == *value { "editor-tab active" } else { "editor-tab" },
                        onclick: move |_| tab.set(*value),
                        "{label}"
                    }
                }
            }

            div { class: "editor-panel",
                match tab() {
                    EditorTab::Home => rsx! { HomeEditor { staging } },
                    EditorTab::About => rsx! { AboutEditor { staging } },
                    EditorTab::Skills => rsx! { SkillsEditor { staging } },
                    EditorTab::Projects => rsx! { ProjectsEditor {} },
                    EditorTab::Certificates => rsx! { CertificatesEditor { staging } },
                    EditorTab::Gallery => rsx! { GalleryEditor { staging } },
                    EditorTab::Social => rsx! { SocialEditor {} },
                    EditorTab::Contact => rsx! { ContactEditor { staging } },
                    EditorTab::Theme => rsx! { ThemeEditor {} },
                }
            }

            ModalBox {}
        }
    }
}
