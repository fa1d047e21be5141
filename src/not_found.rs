use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "page", style: "text-align: center;",
            h1 { class: "page-title", "404" }
            p { class: "page-subtitle", "There's nothing at /{path}." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back Home" }
        }
    }
}
