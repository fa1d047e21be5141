use dioxus::prelude::*;

use crate::common::text_or;
use crate::content::ContentStore;

#[component]
pub fn About() -> Element {
    let content = use_context::<Signal<ContentStore>>();
    let about = content.read().state().about.clone();

    rsx! {
        div { class: "page",
            h1 { class: "page-title", {text_or(&about.title, "About Me")} }
            p { class: "page-subtitle", "{about.lead}" }

            div { class: "card",
                for paragraph in about.body.iter() {
                    p { style: "margin-bottom: var(--space-4);", "{paragraph}" }
                }

                div { style: "display: flex; gap: var(--space-8); margin-top: var(--space-4);",
                    div {
                        p { class: "contact-detail-label", "Based in" }
                        p { {text_or(&about.location, "Earth")} }
                    }
                    div {
                        p { class: "contact-detail-label", "Experience" }
                        p { "{about.years_experience} years" }
                    }
                }
            }
        }
    }
}
