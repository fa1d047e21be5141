use dioxus::prelude::*;
use dioxus_router::prelude::*;

use gloo_timers::callback::Timeout;

use crate::theme::{self, ThemeStore};
use crate::Route;

// How long a click burst on the logo may last before it settles.
const LOGO_CLICK_WINDOW_MS: u32 = 600;

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    let current_path: Route = use_route();
    rsx! {
        Link {
            class: if current_path == target { "nav-link active" } else { "nav-link" },
            to: target,
            "{name}"
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let mut store = use_context::<Signal<ThemeStore>>();

    let icon = if store.read().is_dark() {
        "\u{263E}"
    } else {
        "\u{2600}"
    };

    rsx! {
        button {
            class: "theme-toggle",
            title: "Toggle theme",
            onclick: move |_| {
                let mut store = store.write();
                store.toggle();
                theme::apply_document_class(store.is_dark());
            },
            "{icon}"
        }
    }
}

// Logo gesture: a single click settles to the landing page once the window
// expires; three clicks inside the window push the hidden owner route.
// Cosmetic reveal only, nothing here is a security boundary.
#[component]
fn Logo() -> Element {
    let mut clicks = use_signal(|| 0usize);
    let nav = use_navigator();

    rsx! {
        div {
            class: "logo",
            onclick: move |_| {
                let count = clicks() + 1;
                clicks.set(count);

                if count >= 3 {
                    clicks.set(0);
                    nav.push(Route::OwnerLogin {});
                    return;
                }

                let task = Timeout::new(LOGO_CLICK_WINDOW_MS, move || {
                    // only settle if no further click restarted the burst
                    if clicks() == count {
                        clicks.set(0);
                        nav.push(Route::Home {});
                    }
                });
                task.forget();
            },
            span { class: "logo-mark", "\u{25C6}" }
            span { "folio" }
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                Logo {}

                nav { class: "nav-links",
                    NavBarButton { name: "About".to_owned(), target: Route::About {} }
                    NavBarButton { name: "Skills".to_owned(), target: Route::Skills {} }
                    NavBarButton { name: "Projects".to_owned(), target: Route::Projects {} }
                    NavBarButton { name: "Certificates".to_owned(), target: Route::Certificates {} }
                    NavBarButton { name: "Gallery".to_owned(), target: Route::Gallery {} }
                    NavBarButton { name: "Testimonials".to_owned(), target: Route::Testimonials {} }
                    NavBarButton { name: "Contact".to_owned(), target: Route::Contact {} }
                }

                ThemeToggle {}
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
    }
}
