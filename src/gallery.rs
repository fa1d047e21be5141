use dioxus::prelude::*;

use crate::content::ContentStore;

#[component]
pub fn Gallery() -> Element {
    let content = use_context::<Signal<ContentStore>>();
    let gallery = content.read().state().gallery.clone();

    rsx! {
        div { class: "page",
            h1 { class: "page-title", "{gallery.title}" }
            p { class: "page-subtitle", "{gallery.subtitle}" }

            if gallery.images.is_empty() {
                p { class: "empty-state", "The gallery is empty for now." }
            } else {
                div { class: "gallery-grid",
                    for image in gallery.images.iter() {
                        div { class: "gallery-item",
                            img { src: "{image.src}", alt: "{image.caption}" }
                            if !image.caption.is_empty() {
                                div { class: "gallery-caption", "{image.caption}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
