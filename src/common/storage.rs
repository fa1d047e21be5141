use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

// All persisted keys carry this prefix so the site can share an origin
// with anything else without clobbering its storage.
const KEY_PREFIX: &str = "folio_";

/// Seam between the stores and whatever actually holds the bytes.
///
/// The stores take a boxed backend at construction, so tests run against
/// [`MemoryStorage`] on the host while the app runs against the browser's
/// local storage. A write either lands whole or leaves the previous value
/// intact; callers never see a partial blob.
pub trait StorageBackend {
    fn read(&self, key: &str) -> anyhow::Result<String>;
    fn write(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

// Lets tests hold onto a backend they have already handed to a store.
impl<T: StorageBackend + ?Sized> StorageBackend for std::rc::Rc<T> {
    fn read(&self, key: &str) -> anyhow::Result<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).write(key, value)
    }
}

/// Browser local storage. Failures (quota, disabled storage) surface as
/// errors here and get logged to the console by the caller.
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> anyhow::Result<String> {
        let key = format!("{KEY_PREFIX}{key}");

        LocalStorage::raw()
            .get_item(&key)
            .map_err(|err| {
                console_error!(format!("failed to read local storage {key}: {err:?}"));
                anyhow!("local storage read failure, see console log")
            })?
            .ok_or_else(|| anyhow!("no value stored for {key}"))
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let key = format!("{KEY_PREFIX}{key}");

        LocalStorage::raw().set_item(&key, value).map_err(|err| {
            console_error!(format!("failed to set local storage {key}: {err:?}"));
            anyhow!("local storage write failure, see console log")
        })
    }
}

/// In-memory backend for host-side tests and for sessions where the
/// browser refuses storage access entirely.
#[derive(Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> anyhow::Result<String> {
        self.values
            .borrow()
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow!("no value stored for {key}"))
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
