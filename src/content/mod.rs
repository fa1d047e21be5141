pub mod model;

pub use model::*;

use tracing::{error, warn};

use crate::common::{now_millis, storage::StorageBackend};

pub const CONTENT_KEY: &str = "content";

/// Named top-level sections of the content object, used by the generic
/// scalar-field setter. List-typed sections have their own operations and
/// are deliberately absent here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Section {
    Home,
    About,
    CertificatesPage,
    Gallery,
    Contact,
    SkillsContent,
    Theme,
}

/// Typed wholesale replacement of one section.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionUpdate {
    Home(HomeContent),
    About(AboutContent),
    Projects(Vec<Project>),
    Certificates(Vec<Certificate>),
    CertificatesPage(CertificatesPage),
    Gallery(GalleryContent),
    Contact(ContactContent),
    SocialMedia(Vec<SocialLink>),
    Skills(Skills),
    SkillsContent(SkillsIntro),
    Theme(ThemeColors),
}

/// Sole writer for the site's content. Loads persisted JSON merged over the
/// defaults at construction, and writes the whole object back after every
/// mutation. Persistence failures are logged and swallowed: the in-memory
/// state still reflects the change, it just may not survive a reload.
pub struct ContentStore {
    state: ContentState,
    storage: Box<dyn StorageBackend>,
}

impl ContentStore {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        let state = load(storage.as_ref());
        Self { state, storage }
    }

    /// Read-only snapshot. The shared borrow is what keeps consumers from
    /// mutating in place; anything that needs a mutable copy clones it
    /// (the dashboard's staging buffer does exactly that).
    pub fn state(&self) -> &ContentState {
        &self.state
    }

    /// Replaces one scalar string field inside a named section. Returns
    /// false (and warns) when the section has no such field, so callers get
    /// an explicit not-found signal instead of a silent drop.
    pub fn update_field(&mut self, section: Section, field: &str, value: &str) -> bool {
        let Some(slot) = self.scalar_field(section, field) else {
            warn!("no field {field} in section {section:?}");
            return false;
        };

        *slot = value.to_owned();
        self.persist();
        true
    }

    pub fn update_section(&mut self, update: SectionUpdate) {
        match update {
            SectionUpdate::Home(data) => self.state.home = data,
            SectionUpdate::About(data) => self.state.about = data,
            SectionUpdate::Projects(data) => self.state.projects = data,
            SectionUpdate::Certificates(data) => self.state.certificates = data,
            SectionUpdate::CertificatesPage(data) => self.state.certificates_page = data,
            SectionUpdate::Gallery(data) => self.state.gallery = data,
            SectionUpdate::Contact(data) => self.state.contact = data,
            SectionUpdate::SocialMedia(data) => self.state.social_media = data,
            SectionUpdate::Skills(data) => self.state.skills = data,
            SectionUpdate::SkillsContent(data) => self.state.skills_content = data,
            SectionUpdate::Theme(data) => self.state.theme = data,
        }

        self.persist();
    }

    /// The list-typed social section gets its own replacement operation
    /// rather than riding through the scalar field setter.
    pub fn replace_social_links(&mut self, links: Vec<SocialLink>) {
        self.state.social_media = links;
        self.persist();
    }

    /// Appends a project, assigning it a fresh id. Returns the id so the
    /// caller can keep editing the entry it just added.
    pub fn add_project(&mut self, mut project: Project) -> u64 {
        let id = fresh_id(&self.state.projects);
        project.id = id;
        self.state.projects.push(project);
        self.persist();
        id
    }

    pub fn add_certificate(&mut self, mut certificate: Certificate) -> u64 {
        let id = fresh_id(&self.state.certificates);
        certificate.id = id;
        self.state.certificates.push(certificate);
        self.persist();
        id
    }

    /// Replaces one field of the project with the matching id. False when
    /// no entry or no such field matches; other entries are never touched.
    pub fn update_project_field(&mut self, id: u64, field: &str, value: &str) -> bool {
        let Some(project) = self.state.projects.iter_mut().find(|p| p.id == id) else {
            warn!("no project with id {id}");
            return false;
        };

        match field {
            "title" => project.title = value.to_owned(),
            "description" => project.description = value.to_owned(),
            "link" => project.link = value.to_owned(),
            "repo" => project.repo = value.to_owned(),
            "image" => project.image = value.to_owned(),
            // comma-separated on the way in, trimmed per entry
            "tech" => {
                project.tech = value
                    .split(',')
                    .map(|t| t.trim().to_owned())
                    .filter(|t| !t.is_empty())
                    .collect()
            }
            _ => {
                warn!("no field {field} on projects");
                return false;
            }
        }

        self.persist();
        true
    }

    pub fn update_certificate_field(&mut self, id: u64, field: &str, value: &str) -> bool {
        let Some(cert) = self.state.certificates.iter_mut().find(|c| c.id == id) else {
            warn!("no certificate with id {id}");
            return false;
        };

        match field {
            "title" => cert.title = value.to_owned(),
            "issuer" => cert.issuer = value.to_owned(),
            "year" => cert.year = value.to_owned(),
            "image" => cert.image = value.to_owned(),
            "link" => cert.link = value.to_owned(),
            _ => {
                warn!("no field {field} on certificates");
                return false;
            }
        }

        self.persist();
        true
    }

    pub fn remove_project(&mut self, id: u64) {
        self.state.projects.retain(|p| p.id != id);
        self.persist();
    }

    pub fn remove_certificate(&mut self, id: u64) {
        self.state.certificates.retain(|c| c.id != id);
        self.persist();
    }

    /// Whole-object replacement, used by the dashboard's staging buffer to
    /// commit a draft in one write.
    pub fn replace_all(&mut self, state: ContentState) {
        self.state = state;
        self.persist();
    }

    fn scalar_field(&mut self, section: Section, field: &str) -> Option<&mut String> {
        let state = &mut self.state;

        match (section, field) {
            (Section::Home, "greeting") => Some(&mut state.home.greeting),
            (Section::Home, "name") => Some(&mut state.home.name),
            (Section::Home, "title") => Some(&mut state.home.title),
            (Section::Home, "tagline") => Some(&mut state.home.tagline),
            (Section::Home, "profileImage") => Some(&mut state.home.profile_image),
            (Section::Home, "resume") => Some(&mut state.home.resume),
            (Section::Home, "resumeName") => Some(&mut state.home.resume_name),
            (Section::About, "title") => Some(&mut state.about.title),
            (Section::About, "lead") => Some(&mut state.about.lead),
            (Section::About, "location") => Some(&mut state.about.location),
            (Section::CertificatesPage, "title") => Some(&mut state.certificates_page.title),
            (Section::CertificatesPage, "subtitle") => Some(&mut state.certificates_page.subtitle),
            (Section::Gallery, "title") => Some(&mut state.gallery.title),
            (Section::Gallery, "subtitle") => Some(&mut state.gallery.subtitle),
            (Section::Contact, "title") => Some(&mut state.contact.title),
            (Section::Contact, "subtitle") => Some(&mut state.contact.subtitle),
            (Section::Contact, "email") => Some(&mut state.contact.email),
            (Section::Contact, "phone") => Some(&mut state.contact.phone),
            (Section::Contact, "location") => Some(&mut state.contact.location),
            (Section::SkillsContent, "title") => Some(&mut state.skills_content.title),
            (Section::SkillsContent, "subtitle") => Some(&mut state.skills_content.subtitle),
            (Section::Theme, "primary") => Some(&mut state.theme.primary),
            (Section::Theme, "accent") => Some(&mut state.theme.accent),
            _ => None,
        }
    }

    fn persist(&self) {
        let raw = match serde_json::to_string(&self.state) {
            Ok(raw) => raw,
            Err(err) => {
                error!("failed to serialize content state: {err}");
                return;
            }
        };

        if let Err(err) = self.storage.write(CONTENT_KEY, &raw) {
            // in-memory state is already updated; the session just loses
            // durability until the next successful write
            error!("failed to persist content state: {err}");
        }
    }
}

fn load(storage: &dyn StorageBackend) -> ContentState {
    // missing key is the normal first-visit case, not worth a log line
    let Ok(raw) = storage.read(CONTENT_KEY) else {
        return ContentState::default();
    };

    match serde_json::from_str(&raw) {
        Ok(state) => state,
        Err(err) => {
            error!("malformed persisted content, falling back to defaults: {err}");
            ContentState::default()
        }
    }
}

trait ListEntry {
    fn id(&self) -> u64;
}

impl ListEntry for Project {
    fn id(&self) -> u64 {
        self.id
    }
}

impl ListEntry for Certificate {
    fn id(&self) -> u64 {
        self.id
    }
}

// Epoch millis, bumped past the current maximum so two adds inside the
// same millisecond still get distinct ids.
fn fresh_id<T: ListEntry>(list: &[T]) -> u64 {
    let now = now_millis();

    match list.iter().map(|e| e.id()).max() {
        Some(max) if max >= now => max + 1,
        _ => now,
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::common::storage::{MemoryStorage, StorageBackend};

    struct FailingStorage;

    impl StorageBackend for FailingStorage {
        fn read(&self, key: &str) -> anyhow::Result<String> {
            Err(anyhow::anyhow!("no value stored for {key}"))
        }

        fn write(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("quota exceeded"))
        }
    }

    fn store_with_backend() -> (ContentStore, Rc<MemoryStorage>) {
        let backend = Rc::new(MemoryStorage::new());
        let store = ContentStore::new(Box::new(backend.clone()));
        (store, backend)
    }

    #[test]
    fn fresh_store_starts_from_defaults() {
        let (store, _) = store_with_backend();
        assert_eq!(*store.state(), ContentState::default());
    }

    #[test]
    fn partial_blob_merges_over_defaults() {
        let backend = Rc::new(MemoryStorage::new());
        backend
            .write(CONTENT_KEY, r#"{"projects":[{"id":1,"title":"X"}]}"#)
            .unwrap();

        let store = ContentStore::new(Box::new(backend));
        let state = store.state();
        let defaults = ContentState::default();

        // the provided section is taken exactly as stored
        assert_eq!(state.projects.len(), 1);
        assert_eq!(state.projects[0].id, 1);
        assert_eq!(state.projects[0].title, "X");
        assert_eq!(state.projects[0].description, "");
        assert!(state.projects[0].tech.is_empty());

        // everything absent from the blob comes from the defaults
        assert_eq!(state.about, defaults.about);
        assert_eq!(state.skills, defaults.skills);
        assert_eq!(state.contact, defaults.contact);
        assert_eq!(state.certificates, defaults.certificates);
        assert_eq!(state.social_media, defaults.social_media);
    }

    #[test]
    fn nested_partial_merges_at_depth() {
        let backend = Rc::new(MemoryStorage::new());
        backend
            .write(
                CONTENT_KEY,
                r#"{"home":{"name":"Kim","imageSettings":{"scale":1.4}}}"#,
            )
            .unwrap();

        let store = ContentStore::new(Box::new(backend));
        let home = &store.state().home;
        let defaults = HomeContent::default();

        assert_eq!(home.name, "Kim");
        assert_eq!(home.greeting, defaults.greeting);
        assert_eq!(home.image_settings.scale, 1.4);
        assert_eq!(home.image_settings.offset_x, 0.0);
    }

    #[test]
    fn malformed_blob_falls_back_to_defaults() {
        let backend = Rc::new(MemoryStorage::new());
        backend.write(CONTENT_KEY, "{not json").unwrap();

        let store = ContentStore::new(Box::new(backend));
        assert_eq!(*store.state(), ContentState::default());
    }

    #[test]
    fn mutations_round_trip_through_storage() {
        let (mut store, backend) = store_with_backend();

        store.update_field(Section::Home, "name", "Kim Okafor");
        store.update_field(Section::Contact, "email", "kim@example.com");
        let expected = store.state().clone();

        let reloaded = ContentStore::new(Box::new(backend));
        assert_eq!(*reloaded.state(), expected);
    }

    #[test]
    fn update_field_rejects_unknown_fields() {
        let (mut store, _) = store_with_backend();
        let before = store.state().clone();

        assert!(!store.update_field(Section::Home, "nope", "value"));
        assert_eq!(*store.state(), before);
    }

    #[test]
    fn update_section_replaces_wholesale() {
        let (mut store, backend) = store_with_backend();

        let gallery = GalleryContent {
            title: "Shots".into(),
            subtitle: "A few favorites".into(),
            images: vec![GalleryImage {
                src: "data:image/png;base64,AAAA".into(),
                caption: "test card".into(),
            }],
        };
        store.update_section(SectionUpdate::Gallery(gallery.clone()));

        assert_eq!(store.state().gallery, gallery);
        let reloaded = ContentStore::new(Box::new(backend));
        assert_eq!(reloaded.state().gallery, gallery);
    }

    #[test]
    fn add_then_remove_leaves_list_unchanged() {
        let (mut store, _) = store_with_backend();
        let before = store.state().projects.clone();

        let id = store.add_project(Project {
            title: "Scratch".into(),
            ..Project::default()
        });
        assert_eq!(store.state().projects.len(), before.len() + 1);

        store.remove_project(id);
        assert_eq!(store.state().projects, before);
    }

    #[test]
    fn added_items_get_distinct_ids() {
        let (mut store, _) = store_with_backend();

        let first = store.add_certificate(Certificate::default());
        let second = store.add_certificate(Certificate::default());
        let third = store.add_certificate(Certificate::default());

        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_ne!(first, third);
    }

    #[test]
    fn update_item_targets_only_the_matching_entry() {
        let (mut store, _) = store_with_backend();

        let id = store.add_project(Project {
            title: "Scratch".into(),
            description: "before".into(),
            ..Project::default()
        });
        let others_before: Vec<Project> = store
            .state()
            .projects
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();

        assert!(store.update_project_field(id, "description", "after"));

        let target = store
            .state()
            .projects
            .iter()
            .find(|p| p.id == id)
            .unwrap();
        assert_eq!(target.description, "after");
        assert_eq!(target.title, "Scratch");

        let others_after: Vec<Project> = store
            .state()
            .projects
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        assert_eq!(others_before, others_after);
    }

    #[test]
    fn update_item_signals_missing_entries() {
        let (mut store, _) = store_with_backend();

        assert!(!store.update_project_field(u64::MAX, "title", "ghost"));
        assert!(!store.update_certificate_field(u64::MAX, "title", "ghost"));
    }

    #[test]
    fn tech_field_splits_on_commas() {
        let (mut store, _) = store_with_backend();
        let id = store.add_project(Project::default());

        assert!(store.update_project_field(id, "tech", "Rust, WebAssembly , ,CSS"));

        let project = store
            .state()
            .projects
            .iter()
            .find(|p| p.id == id)
            .unwrap();
        assert_eq!(project.tech, vec!["Rust", "WebAssembly", "CSS"]);
    }

    #[test]
    fn replace_social_links_swaps_the_list() {
        let (mut store, backend) = store_with_backend();

        let links = vec![SocialLink {
            label: "Codeberg".into(),
            url: "https://codeberg.org/avery".into(),
        }];
        store.replace_social_links(links.clone());

        assert_eq!(store.state().social_media, links);
        let reloaded = ContentStore::new(Box::new(backend));
        assert_eq!(reloaded.state().social_media, links);
    }

    #[test]
    fn write_failure_keeps_in_memory_state() {
        let mut store = ContentStore::new(Box::new(FailingStorage));

        store.update_field(Section::Home, "name", "Still Here");
        assert_eq!(store.state().home.name, "Still Here");

        store.remove_project(1);
        assert!(store.state().projects.iter().all(|p| p.id != 1));
    }

    #[test]
    fn replace_all_is_one_write() {
        let (mut store, backend) = store_with_backend();

        let mut next = store.state().clone();
        next.home.name = "Committed".into();
        next.about.location = "Lisbon".into();
        store.replace_all(next.clone());

        assert_eq!(*store.state(), next);
        let reloaded = ContentStore::new(Box::new(backend));
        assert_eq!(*reloaded.state(), next);
    }
}
