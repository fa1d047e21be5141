#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;
mod content;
mod theme;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod about;
use about::About;

mod skills;
use skills::Skills;

mod projects;
use projects::Projects;

mod certificates;
use certificates::Certificates;

mod gallery;
use gallery::Gallery;

mod testimonials;
use testimonials::Testimonials;

mod contact;
use contact::Contact;

mod owner;
use owner::{Dashboard, OwnerLogin};

mod not_found;
use not_found::NotFound;

use common::storage::BrowserStorage;
use content::ContentStore;
use theme::ThemeStore;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/skills")]
        Skills {},
        #[route("/projects")]
        Projects {},
        #[route("/certificates")]
        Certificates {},
        #[route("/gallery")]
        Gallery {},
        #[route("/testimonials")]
        Testimonials {},
        #[route("/contact")]
        Contact {},
        #[route("/owner")]
        OwnerLogin {},
        #[route("/owner/dashboard")]
        Dashboard {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    // both stores are built here and injected through context, so every
    // page sees the same instance and tests can build their own
    let theme_store = use_context_provider(|| {
        Signal::new(ThemeStore::new(
            Box::new(BrowserStorage),
            theme::detect_os_preference(),
        ))
    });
    let content_store =
        use_context_provider(|| Signal::new(ContentStore::new(Box::new(BrowserStorage))));

    // keep the document root marker in sync with the store
    use_effect(move || theme::apply_document_class(theme_store.read().is_dark()));

    // owner-configured accent colors override the stylesheet defaults
    let accent_overrides = {
        let store = content_store.read();
        let colors = &store.state().theme;
        format!(
            ":root {{ --primary: {}; --accent: {}; }}",
            colors.primary, colors.accent
        )
    };

    rsx! {
        style { "{common::style::SITE_STYLES}" }
        style { "{accent_overrides}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
