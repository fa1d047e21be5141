use tracing::error;

use crate::common::storage::StorageBackend;

pub const THEME_KEY: &str = "theme";

const DARK: &str = "dark";
const LIGHT: &str = "light";

/// Light/dark preference. Initialization order: persisted value, then the
/// OS color-scheme preference, then light. The OS query is a browser-side
/// concern, so it comes in through the constructor and tests can inject
/// whatever they need.
pub struct ThemeStore {
    is_dark: bool,
    storage: Box<dyn StorageBackend>,
}

impl ThemeStore {
    pub fn new(storage: Box<dyn StorageBackend>, os_prefers_dark: Option<bool>) -> Self {
        let is_dark = match storage.read(THEME_KEY) {
            Ok(value) => value == DARK,
            Err(_) => os_prefers_dark.unwrap_or(false),
        };

        Self { is_dark, storage }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Flips the mode and persists it. A failed write degrades the session
    /// to in-memory-only; it never reaches the caller.
    pub fn toggle(&mut self) {
        self.is_dark = !self.is_dark;

        let value = if self.is_dark { DARK } else { LIGHT };
        if let Err(err) = self.storage.write(THEME_KEY, value) {
            error!("failed to persist theme preference: {err}");
        }
    }
}

/// Queries `prefers-color-scheme: dark`. None when the query is not
/// available (no window, matchMedia unsupported).
pub fn detect_os_preference() -> Option<bool> {
    let query = web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()??;

    Some(query.matches())
}

/// Toggles the `dark` marker class on the document root so the stylesheet's
/// `html.dark` variable overrides take effect.
pub fn apply_document_class(is_dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let result = if is_dark {
        classes.add_1(DARK)
    } else {
        classes.remove_1(DARK)
    };

    if let Err(err) = result {
        error!("failed to update document theme class: {err:?}");
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::common::storage::MemoryStorage;

    struct FailingStorage;

    impl StorageBackend for FailingStorage {
        fn read(&self, key: &str) -> anyhow::Result<String> {
            Err(anyhow::anyhow!("no value stored for {key}"))
        }

        fn write(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("storage disabled"))
        }
    }

    #[test]
    fn defaults_to_light_without_any_signal() {
        let store = ThemeStore::new(Box::new(MemoryStorage::new()), None);
        assert!(!store.is_dark());
    }

    #[test]
    fn os_preference_fills_the_gap() {
        let store = ThemeStore::new(Box::new(MemoryStorage::new()), Some(true));
        assert!(store.is_dark());
    }

    #[test]
    fn persisted_value_beats_os_preference() {
        let backend = Rc::new(MemoryStorage::new());
        backend.write(THEME_KEY, "light").unwrap();

        // OS says dark, but the stored choice wins
        let store = ThemeStore::new(Box::new(backend), Some(true));
        assert!(!store.is_dark());
    }

    #[test]
    fn toggle_survives_reinitialization() {
        let backend = Rc::new(MemoryStorage::new());

        let mut store = ThemeStore::new(Box::new(backend.clone()), None);
        store.toggle();
        assert!(store.is_dark());

        // a fresh store over the same backend sees the persisted choice,
        // with no OS fallback consulted
        let reloaded = ThemeStore::new(Box::new(backend), Some(false));
        assert!(reloaded.is_dark());
    }

    #[test]
    fn write_failure_keeps_in_memory_state() {
        let mut store = ThemeStore::new(Box::new(FailingStorage), None);

        store.toggle();
        assert!(store.is_dark());

        store.toggle();
        assert!(!store.is_dark());
    }
}
