use dioxus::prelude::*;

use crate::content::ContentStore;

// global modal signal
//
// the dashboard pushes confirmations here rather than each editor carrying
// its own open/closed flag
pub static MODAL_STACK: GlobalSignal<Vec<Modal>> = Signal::global(|| Vec::new());

pub enum Modal {
    RemoveProject(u64),
    RemoveCertificate(u64),
}

/// Renders whatever sits on top of the modal stack. Include once per page
/// that pushes modals.
#[component]
pub fn ModalBox() -> Element {
    match MODAL_STACK.read().last() {
        Some(val) => match *val {
            Modal::RemoveProject(id) => rsx! {
                ConfirmRemoveModal { kind: RemoveKind::Project, id }
            },
            Modal::RemoveCertificate(id) => rsx! {
                ConfirmRemoveModal { kind: RemoveKind::Certificate, id }
            },
        },
        None => rsx! {},
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum RemoveKind {
    Project,
    Certificate,
}

#[derive(Clone, PartialEq, Props)]
struct ConfirmRemoveModalProps {
    kind: RemoveKind,
    id: u64,
}

#[component]
fn ConfirmRemoveModal(props: ConfirmRemoveModalProps) -> Element {
    let kind = props.kind;
    let id = props.id;
    let mut content = use_context::<Signal<ContentStore>>();

    let (title, what) = match kind {
        RemoveKind::Project => ("Remove Project", "project"),
        RemoveKind::Certificate => ("Remove Certificate", "certificate"),
    };

    let name = {
        let store = content.read();
        match kind {
            RemoveKind::Project => store
                .state()
                .projects
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.title.clone()),
            RemoveKind::Certificate => store
                .state()
                .certificates
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.title.clone()),
        }
        .unwrap_or_else(|| format!("#{id}"))
    };

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal-card",
                h3 { class: "modal-title", "{title}" }
                p { "Remove the {what} \"{name}\"? This cannot be undone." }
                div { class: "modal-buttons",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            MODAL_STACK.with_mut(|v| v.pop());
                        },
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| {
                            match kind {
                                RemoveKind::Project => content.write().remove_project(id),
                                RemoveKind::Certificate => content.write().remove_certificate(id),
                            }
                            MODAL_STACK.with_mut(|v| v.pop());
                        },
                        "Remove"
                    }
                }
            }
        }
    }
}
