mod dashboard;
mod editors;
mod staging;
mod upload;

pub use dashboard::Dashboard;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

// Novelty gate, not authentication: a literal string comparison in a
// client-side bundle guards nothing. It only keeps the dashboard out of
// casual view.
const OWNER_USERNAME: &str = "owner";
const OWNER_PASSWORD: &str = "letmein";

#[component]
pub fn OwnerLogin() -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut rejected = use_signal(|| false);
    let nav = use_navigator();

    let handle_login = move |_| {
        if username() == OWNER_USERNAME && password() == OWNER_PASSWORD {
            rejected.set(false);
            nav.push(Route::Dashboard {});
        } else {
            rejected.set(true);
        }
    };

    rsx! {
        div { class: "card login-card",
            h1 { class: "card-title", "Owner Access" }
            p { class: "card-subtitle", "This area is for the site owner." }

            if rejected() {
                div { class: "alert alert-error", "Those credentials don't match." }
            }

            div { class: "form-group",
                label { class: "form-label", "Username" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value().clone()),
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Password" }
                input {
                    class: "form-input",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value().clone()),
                }
            }
            button {
                class: "btn btn-primary",
                style: "width: 100%;",
                onclick: handle_login,
                "Enter"
            }
        }
    }
}
