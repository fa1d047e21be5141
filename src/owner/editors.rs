use dioxus::prelude::*;

use crate::components::modal::{Modal, MODAL_STACK};
use crate::content::{
    Certificate, ContentStore, GalleryImage, Project, Section, Skill, SocialLink,
};

use super::staging::StagingBuffer;
use super::upload;

// Staged editors take the staging buffer; their edits sit in the draft
// until the dashboard's Save commits them. List editors take the store
// from context and apply immediately.

#[component]
pub fn HomeEditor(mut staging: Signal<StagingBuffer>) -> Element {
    let home = staging.read().draft().home.clone();

    rsx! {
        div { class: "form-row",
            div { class: "form-group",
                label { class: "form-label", "Greeting" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{home.greeting}",
                    oninput: move |evt| staging.with_mut(|s| s.edit(|d| d.home.greeting = evt.value())),
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Name" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{home.name}",
                    oninput: move |evt| staging.with_mut(|s| s.edit(|d| d.home.name = evt.value())),
                }
            }
        }
        div { class: "form-group",
            label { class: "form-label", "Title" }
            input {
                class: "form-input",
                r#type: "text",
                value: "{home.title}",
                oninput: move |evt| staging.with_mut(|s| s.edit(|d| d.home.title = evt.value())),
            }
        }
        div { class: "form-group",
            label { class: "form-label", "Tagline" }
            textarea {
                class: "form-textarea",
                style: "min-height: 60px;",
                value: "{home.tagline}",
                oninput: move |evt| staging.with_mut(|s| s.edit(|d| d.home.tagline = evt.value())),
            }
        }

        div { class: "form-group",
            label { class: "form-label", "Profile Photo" }
            input {
                r#type: "file",
                accept: "image/*",
                onchange: move |evt| async move {
                    let Some(engine) = evt.files() else { return };
                    if let Some(file) = upload::read_first_file(engine).await {
                        staging.with_mut(|s| s.edit(|d| d.home.profile_image = file.data_url));
                    }
                },
            }
            if !home.profile_image.is_empty() {
                img { class: "image-preview", src: "{home.profile_image}" }
            }
        }

        div { class: "form-row",
            div { class: "form-group",
                label { class: "form-label", "Photo scale ({home.image_settings.scale:.2})" }
                input {
                    r#type: "range",
                    min: "0.5",
                    max: "2",
                    step: "0.05",
                    value: "{home.image_settings.scale}",
                    oninput: move |evt| {
                        if let Ok(v) = evt.value().parse::<f64>() {
                            staging.with_mut(|s| s.edit(|d| d.home.image_settings.scale = v));
                        }
                    },
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Offset X ({home.image_settings.offset_x:.0}px)" }
                input {
                    r#type: "range",
                    min: "-50",
                    max: "50",
                    value: "{home.image_settings.offset_x}",
                    oninput: move |evt| {
                        if let Ok(v) = evt.value().parse::<f64>() {
                            staging.with_mut(|s| s.edit(|d| d.home.image_settings.offset_x = v));
                        }
                    },
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Offset Y ({home.image_settings.offset_y:.0}px)" }
                input {
                    r#type: "range",
                    min: "-50",
                    max: "50",
                    value: "{home.image_settings.offset_y}",
                    oninput: move |evt| {
                        if let Ok(v) = evt.value().parse::<f64>() {
                            staging.with_mut(|s| s.edit(|d| d.home.image_settings.offset_y = v));
                        }
                    },
                }
            }
        }

        div { class: "form-group",
            label { class: "form-label", "Resume (PDF)" }
            input {
                r#type: "file",
                accept: ".pdf",
                onchange: move |evt| async move {
                    let Some(engine) = evt.files() else { return };
                    if let Some(file) = upload::read_first_file(engine).await {
                        staging.with_mut(|s| s.edit(|d| {
                            d.home.resume = file.data_url;
                            d.home.resume_name = file.name;
                        }));
                    }
                },
            }
            if !home.resume.is_empty() {
                p { class: "form-hint", "Current file: {home.resume_name}" }
            }
        }
    }
}

#[component]
pub fn AboutEditor(mut staging: Signal<StagingBuffer>) -> Element {
    let about = staging.read().draft().about.clone();
    let body = about.body.join("\n");

    rsx! {
        div { class: "form-group",
            label { class: "form-label", "Title" }
            input {
                class: "form-input",
                r#type: "text",
                value: "{about.title}",
                oninput: move |evt| staging.with_mut(|s| s.edit(|d| d.about.title = evt.value())),
            }
        }
        div { class: "form-group",
            label { class: "form-label", "Lead" }
            input {
                class: "form-input",
                r#type: "text",
                value: "{about.lead}",
                oninput: move |evt| staging.with_mut(|s| s.edit(|d| d.about.lead = evt.value())),
            }
        }
        div { class: "form-group",
            label { class: "form-label", "Body" }
            textarea {
                class: "form-textarea",
                value: "{body}",
                oninput: move |evt| staging.with_mut(|s| s.edit(|d| {
                    d.about.body = evt.value().lines().map(str::to_owned).collect();
                })),
            }
            p { class: "form-hint", "One paragraph per line." }
        }
        div { class: "form-row",
            div { class: "form-group",
                label { class: "form-label", "Location" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{about.location}",
                    oninput: move |evt| staging.with_mut(|s| s.edit(|d| d.about.location = evt.value())),
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Years of experience" }
                input {
                    class: "form-input",
                    r#type: "number",
                    min: "0",
                    value: "{about.years_experience}",
                    oninput: move |evt| {
                        if let Ok(v) = evt.value().parse::<u32>() {
                            staging.with_mut(|s| s.edit(|d| d.about.years_experience = v));
                        }
                    },
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SkillRowsProps {
    staging: Signal<StagingBuffer>,
    heading: &'static str,
    technical: bool,
}

#[component]
fn SkillRows(props: SkillRowsProps) -> Element {
    let mut staging = props.staging;
    let technical = props.technical;

    let pick = move |s: &crate::content::ContentState| {
        if technical {
            s.skills.technical.clone()
        } else {
            s.skills.soft.clone()
        }
    };
    let rows = pick(staging.read().draft());

    rsx! {
        div { class: "skill-group",
            div { class: "editor-item-head",
                h3 { "{props.heading}" }
                button {
                    class: "btn btn-secondary btn-sm",
                    onclick: move |_| staging.with_mut(|s| s.edit(|d| {
                        let list = if technical { &mut d.skills.technical } else { &mut d.skills.soft };
                        list.push(Skill { name: String::new(), level: 50 });
                    })),
                    "Add Skill"
                }
            }
            for (idx, skill) in rows.iter().enumerate() {
                div { class: "form-row",
                    div { class: "form-group",
                        input {
                            class: "form-input",
                            r#type: "text",
                            placeholder: "Skill name",
                            value: "{skill.name}",
                            oninput: move |evt| staging.with_mut(|s| s.edit(|d| {
                                let list = if technical { &mut d.skills.technical } else { &mut d.skills.soft };
                                if let Some(entry) = list.get_mut(idx) {
                                    entry.name = evt.value();
                                }
                            })),
                        }
                    }
                    div { class: "form-group",
                        input {
                            class: "form-input",
                            r#type: "number",
                            min: "0",
                            max: "100",
                            value: "{skill.level}",
                            oninput: move |evt| {
                                if let Ok(v) = evt.value().parse::<u8>() {
                                    staging.with_mut(|s| s.edit(|d| {
                                        let list = if technical { &mut d.skills.technical } else { &mut d.skills.soft };
                                        if let Some(entry) = list.get_mut(idx) {
                                            entry.level = v.min(100);
                                        }
                                    }));
                                }
                            },
                        }
                    }
                    div { class: "form-group", style: "flex: 0;",
                        button {
                            class: "btn btn-danger btn-sm",
                            onclick: move |_| staging.with_mut(|s| s.edit(|d| {
                                let list = if technical { &mut d.skills.technical } else { &mut d.skills.soft };
                                if idx < list.len() {
                                    list.remove(idx);
                                }
                            })),
                            "\u{2715}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SkillsEditor(mut staging: Signal<StagingBuffer>) -> Element {
    let intro = staging.read().draft().skills_content.clone();

    rsx! {
        div { class: "form-row",
            div { class: "form-group",
                label { class: "form-label", "Page title" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{intro.title}",
                    oninput: move |evt| staging.with_mut(|s| s.edit(|d| d.skills_content.title = evt.value())),
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Subtitle" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{intro.subtitle}",
                    oninput: move |evt| staging.with_mut(|s| s.edit(|d| d.skills_content.subtitle = evt.value())),
                }
            }
        }

        SkillRows { staging, heading: "Technical", technical: true }
        SkillRows { staging, heading: "Soft Skills", technical: false }
    }
}

#[component]
pub fn ProjectsEditor() -> Element {
    let mut content = use_context::<Signal<ContentStore>>();
    let projects = content.read().state().projects.clone();

    rsx! {
        div { class: "editor-item-head",
            h3 { "Projects" }
            button {
                class: "btn btn-primary btn-sm",
                onclick: move |_| {
                    content.write().add_project(Project {
                        title: "New Project".into(),
                        ..Project::default()
                    });
                },
                "Add Project"
            }
        }

        for project in projects {
            ProjectItemEditor { project }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProjectItemEditorProps {
    project: Project,
}

#[component]
fn ProjectItemEditor(props: ProjectItemEditorProps) -> Element {
    let mut content = use_context::<Signal<ContentStore>>();
    let project = props.project;
    let id = project.id;
    let tech = project.tech.join(", ");

    rsx! {
        div { class: "editor-item",
            div { class: "editor-item-head",
                span { style: "font-weight: 600;", "{project.title}" }
                button {
                    class: "btn btn-danger btn-sm",
                    onclick: move |_| {
                        MODAL_STACK.with_mut(|v| v.push(Modal::RemoveProject(id)));
                    },
                    "Remove"
                }
            }

            div { class: "form-group",
                label { class: "form-label", "Title" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{project.title}",
                    oninput: move |evt| {
                        content.write().update_project_field(id, "title", &evt.value());
                    },
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Description" }
                textarea {
                    class: "form-textarea",
                    style: "min-height: 80px;",
                    value: "{project.description}",
                    oninput: move |evt| {
                        content.write().update_project_field(id, "description", &evt.value());
                    },
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Tech (comma-separated)" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{tech}",
                    oninput: move |evt| {
                        content.write().update_project_field(id, "tech", &evt.value());
                    },
                }
            }
            div { class: "form-row",
                div { class: "form-group",
                    label { class: "form-label", "Live link" }
                    input {
                        class: "form-input",
                        r#type: "url",
                        value: "{project.link}",
                        oninput: move |evt| {
                            content.write().update_project_field(id, "link", &evt.value());
                        },
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Repository" }
                    input {
                        class: "form-input",
                        r#type: "url",
                        value: "{project.repo}",
                        oninput: move |evt| {
                            content.write().update_project_field(id, "repo", &evt.value());
                        },
                    }
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Screenshot" }
                input {
                    r#type: "file",
                    accept: "image/*",
                    onchange: move |evt| async move {
                        let Some(engine) = evt.files() else { return };
                        if let Some(file) = upload::read_first_file(engine).await {
                            content.write().update_project_field(id, "image", &file.data_url);
                        }
                    },
                }
                if !project.image.is_empty() {
                    img { class: "image-preview", src: "{project.image}" }
                }
            }
        }
    }
}

#[component]
pub fn CertificatesEditor(mut staging: Signal<StagingBuffer>) -> Element {
    let mut content = use_context::<Signal<ContentStore>>();
    let heading = staging.read().draft().certificates_page.clone();
    let certificates = content.read().state().certificates.clone();

    rsx! {
        div { class: "form-row",
            div { class: "form-group",
                label { class: "form-label", "Page title" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{heading.title}",
                    oninput: move |evt| staging.with_mut(|s| s.edit(|d| d.certificates_page.title = evt.value())),
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Subtitle" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{heading.subtitle}",
                    oninput: move |evt| staging.with_mut(|s| s.edit(|d| d.certificates_page.subtitle = evt.value())),
                }
            }
        }

        div { class: "editor-item-head",
            h3 { "Certificates" }
            button {
                class: "btn btn-primary btn-sm",
                onclick: move |_| {
                    content.write().add_certificate(Certificate {
                        title: "New Certificate".into(),
                        ..Certificate::default()
                    });
                },
                "Add Certificate"
            }
        }

        for certificate in certificates {
            CertificateItemEditor { certificate }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CertificateItemEditorProps {
    certificate: Certificate,
}

#[component]
fn CertificateItemEditor(props: CertificateItemEditorProps) -> Element {
    let mut content = use_context::<Signal<ContentStore>>();
    let cert = props.certificate;
    let id = cert.id;

    rsx! {
        div { class: "editor-item",
            div { class: "editor-item-head",
                span { style: "font-weight: 600;", "{cert.title}" }
                button {
                    class: "btn btn-danger btn-sm",
                    onclick: move |_| {
                        MODAL_STACK.with_mut(|v| v.push(Modal::RemoveCertificate(id)));
                    },
                    "Remove"
                }
            }

            div { class: "form-group",
                label { class: "form-label", "Title" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{cert.title}",
                    oninput: move |evt| {
                        content.write().update_certificate_field(id, "title", &evt.value());
                    },
                }
            }
            div { class: "form-row",
                div { class: "form-group",
                    label { class: "form-label", "Issuer" }
                    input {
                        class: "form-input",
                        r#type: "text",
                        value: "{cert.issuer}",
                        oninput: move |evt| {
                            content.write().update_certificate_field(id, "issuer", &evt.value());
                        },
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Year" }
                    input {
                        class: "form-input",
                        r#type: "text",
                        value: "{cert.year}",
                        oninput: move |evt| {
                            content.write().update_certificate_field(id, "year", &evt.value());
                        },
                    }
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Verification link" }
                input {
                    class: "form-input",
                    r#type: "url",
                    value: "{cert.link}",
                    oninput: move |evt| {
                        content.write().update_certificate_field(id, "link", &evt.value());
                    },
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Certificate image" }
                input {
                    r#type: "file",
                    accept: "image/*",
                    onchange: move |evt| async move {
                        let Some(engine) = evt.files() else { return };
                        if let Some(file) = upload::read_first_file(engine).await {
                            content.write().update_certificate_field(id, "image", &file.data_url);
                        }
                    },
                }
                if !cert.image.is_empty() {
                    img { class: "image-preview", src: "{cert.image}" }
                }
            }
        }
    }
}

#[component]
pub fn GalleryEditor(mut staging: Signal<StagingBuffer>) -> Element {
    let gallery = staging.read().draft().gallery.clone();

    rsx! {
        div { class: "form-row",
            div { class: "form-group",
                label { class: "form-label", "Page title" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{gallery.title}",
                    oninput: move |evt| staging.with_mut(|s| s.edit(|d| d.gallery.title = evt.value())),
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Subtitle" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{gallery.subtitle}",
                    oninput: move |evt| staging.with_mut(|s| s.edit(|d| d.gallery.subtitle = evt.value())),
                }
            }
        }

        div { class: "form-group",
            label { class: "form-label", "Add image" }
            input {
                r#type: "file",
                accept: "image/*",
                onchange: move |evt| async move {
                    let Some(engine) = evt.files() else { return };
                    if let Some(file) = upload::read_first_file(engine).await {
                        staging.with_mut(|s| s.edit(|d| {
                            d.gallery.images.push(GalleryImage {
                                src: file.data_url,
                                caption: String::new(),
                            });
                        }));
                    }
                },
            }
        }

        for (idx, image) in gallery.images.iter().enumerate() {
            div { class: "editor-item",
                img { class: "image-preview", src: "{image.src}" }
                div { class: "form-row",
                    div { class: "form-group",
                        input {
                            class: "form-input",
                            r#type: "text",
                            placeholder: "Caption",
                            value: "{image.caption}",
                            oninput: move |evt| staging.with_mut(|s| s.edit(|d| {
                                if let Some(entry) = d.gallery.images.get_mut(idx) {
                                    entry.caption = evt.value();
                                }
                            })),
                        }
                    }
                    div { class: "form-group", style: "flex: 0;",
                        button {
                            class: "btn btn-danger btn-sm",
                            onclick: move |_| staging.with_mut(|s| s.edit(|d| {
                                if idx < d.gallery.images.len() {
                                    d.gallery.images.remove(idx);
                                }
                            })),
                            "Remove"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SocialEditor() -> Element {
    let mut content = use_context::<Signal<ContentStore>>();
    let mut rows = use_signal(|| content.read().state().social_media.clone());
    let mut status_message = use_signal(String::new);

    rsx! {
        div { class: "editor-item-head",
            h3 { "Social Links" }
            button {
                class: "btn btn-secondary btn-sm",
                onclick: move |_| {
                    rows.with_mut(|r| r.push(SocialLink::default()));
                },
                "Add Link"
            }
        }

        for (idx, link) in rows().iter().enumerate() {
            div { class: "form-row",
                div { class: "form-group",
                    input {
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Label",
                        value: "{link.label}",
                        oninput: move |evt| rows.with_mut(|r| {
                            if let Some(entry) = r.get_mut(idx) {
                                entry.label = evt.value();
                            }
                        }),
                    }
                }
                div { class: "form-group",
                    input {
                        class: "form-input",
                        r#type: "url",
                        placeholder: "https://...",
                        value: "{link.url}",
                        oninput: move |evt| rows.with_mut(|r| {
                            if let Some(entry) = r.get_mut(idx) {
                                entry.url = evt.value();
                            }
                        }),
                    }
                }
                div { class: "form-group", style: "flex: 0;",
                    button {
                        class: "btn btn-danger btn-sm",
                        onclick: move |_| rows.with_mut(|r| {
                            if idx < r.len() {
                                r.remove(idx);
                            }
                        }),
                        "\u{2715}"
                    }
                }
            }
        }

        div { class: "modal-buttons",
            span { class: "status-message", "{status_message}" }
            button {
                class: "btn btn-primary",
                onclick: move |_| {
                    content.write().replace_social_links(rows());
                    status_message.set("Links saved".into());
                },
                "Save Links"
            }
        }
    }
}

#[component]
pub fn ContactEditor(mut staging: Signal<StagingBuffer>) -> Element {
    let contact = staging.read().draft().contact.clone();

    rsx! {
        div { class: "form-row",
            div { class: "form-group",
                label { class: "form-label", "Page title" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{contact.title}",
                    oninput: move |evt| staging.with_mut(|s| s.edit(|d| d.contact.title = evt.value())),
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Subtitle" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{contact.subtitle}",
                    oninput: move |evt| staging.with_mut(|s| s.edit(|d| d.contact.subtitle = evt.value())),
                }
            }
        }
        div { class: "form-group",
            label { class: "form-label", "Email" }
            input {
                class: "form-input",
                r#type: "email",
                value: "{contact.email}",
                oninput: move |evt| staging.with_mut(|s| s.edit(|d| d.contact.email = evt.value())),
            }
        }
        div { class: "form-row",
            div { class: "form-group",
                label { class: "form-label", "Phone" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{contact.phone}",
                    oninput: move |evt| staging.with_mut(|s| s.edit(|d| d.contact.phone = evt.value())),
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Location" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{contact.location}",
                    oninput: move |evt| staging.with_mut(|s| s.edit(|d| d.contact.location = evt.value())),
                }
            }
        }
    }
}

// Color changes apply straight through the store: immediate preview is the
// whole point of picking a color.
#[component]
pub fn ThemeEditor() -> Element {
    let mut content = use_context::<Signal<ContentStore>>();
    let colors = content.read().state().theme.clone();

    rsx! {
        div { class: "form-row",
            div { class: "form-group",
                label { class: "form-label", "Primary color" }
                input {
                    r#type: "color",
                    value: "{colors.primary}",
                    oninput: move |evt| {
                        content.write().update_field(Section::Theme, "primary", &evt.value());
                    },
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Accent color" }
                input {
                    r#type: "color",
                    value: "{colors.accent}",
                    oninput: move |evt| {
                        content.write().update_field(Section::Theme, "accent", &evt.value());
                    },
                }
            }
        }
        p { class: "form-hint", "Colors apply immediately across the whole site." }
    }
}
