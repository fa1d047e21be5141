use dioxus::prelude::*;

use gloo_timers::callback::Timeout;

use crate::content::ContentStore;

// There is no mail backend; submission is a fixed delay before the
// confirmation shows, matching the rest of the site's no-server design.
const FAKE_SUBMIT_DELAY_MS: u32 = 1200;

#[component]
pub fn Contact() -> Element {
    let content = use_context::<Signal<ContentStore>>();
    let (contact, socials) = {
        let store = content.read();
        (
            store.state().contact.clone(),
            store.state().social_media.clone(),
        )
    };

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut sent = use_signal(|| false);

    let handle_submit = move |_| {
        if submitting() {
            return;
        }
        submitting.set(true);
        sent.set(false);

        let task = Timeout::new(FAKE_SUBMIT_DELAY_MS, move || {
            submitting.set(false);
            sent.set(true);
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        });
        task.forget();
    };

    rsx! {
        div { class: "page",
            h1 { class: "page-title", "{contact.title}" }
            p { class: "page-subtitle", "{contact.subtitle}" }

            div { class: "contact-layout",
                div { class: "card",
                    div { class: "contact-detail",
                        p { class: "contact-detail-label", "Email" }
                        a { href: "mailto:{contact.email}", "{contact.email}" }
                    }
                    div { class: "contact-detail",
                        p { class: "contact-detail-label", "Phone" }
                        p { "{contact.phone}" }
                    }
                    div { class: "contact-detail",
                        p { class: "contact-detail-label", "Location" }
                        p { "{contact.location}" }
                    }

                    div { class: "social-links",
                        for link in socials.iter() {
                            a {
                                class: "btn btn-secondary btn-sm",
                                href: "{link.url}",
                                target: "_blank",
                                "{link.label}"
                            }
                        }
                    }
                }

                div { class: "card",
                    if sent() {
                        div { class: "alert alert-success", "Thanks! Your message has been sent." }
                    }

                    div { class: "form-group",
                        label { class: "form-label", "Name" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value().clone()),
                            placeholder: "Jane Doe",
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", "Email" }
                        input {
                            class: "form-input",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value().clone()),
                            placeholder: "jane@example.com",
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", "Message" }
                        textarea {
                            class: "form-textarea",
                            value: "{message}",
                            oninput: move |evt| message.set(evt.value().clone()),
                            placeholder: "What can I help with?",
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: submitting() || message().is_empty(),
                        onclick: handle_submit,
                        if submitting() { "Sending..." } else { "Send Message" }
                    }
                }
            }
        }
    }
}
