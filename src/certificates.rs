use dioxus::prelude::*;

use crate::content::{Certificate, ContentStore};

#[derive(Clone, PartialEq, Props)]
struct CertificateCardProps {
    certificate: Certificate,
}

#[component]
fn CertificateCard(props: CertificateCardProps) -> Element {
    let cert = props.certificate;

    rsx! {
        div { class: "card",
            if !cert.image.is_empty() {
                img {
                    class: "project-image",
                    src: "{cert.image}",
                    alt: "{cert.title}",
                }
            }
            h3 { class: "card-title", "{cert.title}" }
            p { class: "card-subtitle", "{cert.issuer} \u{00B7} {cert.year}" }

            if !cert.link.is_empty() {
                div { class: "card-links",
                    a { href: "{cert.link}", target: "_blank", "Verify" }
                }
            }
        }
    }
}

#[component]
pub fn Certificates() -> Element {
    let content = use_context::<Signal<ContentStore>>();
    let (heading, certificates) = {
        let store = content.read();
        (
            store.state().certificates_page.clone(),
            store.state().certificates.clone(),
        )
    };

    rsx! {
        div { class: "page",
            h1 { class: "page-title", "{heading.title}" }
            p { class: "page-subtitle", "{heading.subtitle}" }

            if certificates.is_empty() {
                p { class: "empty-state", "No certificates listed yet." }
            } else {
                div { class: "card-grid",
                    for certificate in certificates {
                        CertificateCard { certificate }
                    }
                }
            }
        }
    }
}
