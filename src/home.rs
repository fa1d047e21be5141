use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::common::text_or;
use crate::content::ContentStore;
use crate::Route;

#[component]
pub fn Home() -> Element {
    let content = use_context::<Signal<ContentStore>>();
    let home = content.read().state().home.clone();

    // owner-tuned crop applied to the inline profile image
    let image_style = format!(
        "transform: scale({}) translate({}px, {}px);",
        home.image_settings.scale, home.image_settings.offset_x, home.image_settings.offset_y
    );

    rsx! {
        section { class: "hero",
            div { class: "page",
                if !home.profile_image.is_empty() {
                    div { class: "profile-frame",
                        img {
                            src: "{home.profile_image}",
                            alt: "{home.name}",
                            style: "{image_style}",
                        }
                    }
                }

                p { class: "hero-greeting", "{home.greeting}" }
                h1 { class: "hero-name", {text_or(&home.name, "Your Name")} }
                h2 { class: "hero-title", {text_or(&home.title, "Developer")} }
                p { class: "hero-tagline", "{home.tagline}" }

                div { class: "hero-actions",
                    Link {
                        to: Route::Projects {},
                        class: "btn btn-primary btn-lg",
                        "See My Work"
                    }
                    Link {
                        to: Route::Contact {},
                        class: "btn btn-secondary btn-lg",
                        "Get in Touch"
                    }
                    if !home.resume.is_empty() {
                        a {
                            class: "btn btn-secondary btn-lg",
                            href: "{home.resume}",
                            download: "{home.resume_name}",
                            "Download Resume"
                        }
                    }
                }
            }
        }
    }
}
