use crate::content::{ContentState, ContentStore};

/// Two-phase edit buffer for the dashboard: stage locally, commit
/// atomically. Scalar-section editors mutate the draft only; nothing
/// reaches the store (or storage) until [`commit`](Self::commit).
///
/// Sections edited straight through the store (projects, certificates,
/// social links, theme colors) are carried from the store's copy on
/// commit, not the draft's. A stale draft can never roll those back.
pub struct StagingBuffer {
    draft: ContentState,
    dirty: bool,
}

impl StagingBuffer {
    pub fn new(snapshot: ContentState) -> Self {
        Self {
            draft: snapshot,
            dirty: false,
        }
    }

    pub fn draft(&self) -> &ContentState {
        &self.draft
    }

    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// Mutates the draft and raises the unsaved-changes flag.
    pub fn edit(&mut self, f: impl FnOnce(&mut ContentState)) {
        f(&mut self.draft);
        self.dirty = true;
    }

    /// Pushes the draft into the store as one whole-object replacement and
    /// clears the unsaved-changes flag.
    pub fn commit(&mut self, store: &mut ContentStore) {
        let mut next = self.draft.clone();
        next.projects = store.state().projects.clone();
        next.certificates = store.state().certificates.clone();
        next.social_media = store.state().social_media.clone();
        next.theme = store.state().theme.clone();

        store.replace_all(next.clone());
        self.draft = next;
        self.dirty = false;
    }

    /// Throws the draft away and re-seeds from a fresh store snapshot.
    pub fn discard(&mut self, snapshot: ContentState) {
        self.draft = snapshot;
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::common::storage::MemoryStorage;
    use crate::content::{Project, Section};

    fn store() -> ContentStore {
        ContentStore::new(Box::new(Rc::new(MemoryStorage::new())))
    }

    #[test]
    fn editing_never_touches_the_store() {
        let store = store();
        let before = store.state().clone();

        let mut staging = StagingBuffer::new(before.clone());
        staging.edit(|d| d.home.name = "Draft Only".into());
        staging.edit(|d| d.contact.email = "draft@example.com".into());

        assert!(staging.dirty());
        assert_eq!(staging.draft().home.name, "Draft Only");
        assert_eq!(*store.state(), before);
    }

    #[test]
    fn commit_applies_the_draft_in_one_replacement() {
        let mut store = store();

        let mut staging = StagingBuffer::new(store.state().clone());
        staging.edit(|d| d.home.name = "Committed".into());
        staging.commit(&mut store);

        assert!(!staging.dirty());
        assert_eq!(store.state().home.name, "Committed");
    }

    #[test]
    fn discard_restores_the_snapshot() {
        let store = store();
        let before = store.state().clone();

        let mut staging = StagingBuffer::new(before.clone());
        staging.edit(|d| d.about.lead = "never saved".into());
        staging.discard(store.state().clone());

        assert!(!staging.dirty());
        assert_eq!(*staging.draft(), before);
        assert_eq!(*store.state(), before);
    }

    #[test]
    fn commit_carries_store_side_item_edits() {
        let mut store = store();
        let mut staging = StagingBuffer::new(store.state().clone());

        // a field edit sits in the draft while an item and a color are
        // changed directly through the store
        staging.edit(|d| d.home.name = "Both Survive".into());
        let id = store.add_project(Project {
            title: "Added Meanwhile".into(),
            ..Project::default()
        });
        store.update_field(Section::Theme, "primary", "#112233");

        staging.commit(&mut store);

        assert_eq!(store.state().home.name, "Both Survive");
        assert!(store.state().projects.iter().any(|p| p.id == id));
        assert_eq!(store.state().theme.primary, "#112233");
    }
}
