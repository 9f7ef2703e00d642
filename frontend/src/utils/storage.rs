use thiserror::Error;
use web_sys::{Storage, Window};

/// localStorage key holding the bearer credential.
pub const TOKEN_KEY: &str = "token";
/// localStorage key holding the JSON-encoded account.
pub const ACCOUNT_KEY: &str = "user";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("No window object")]
    NoWindow,
    #[error("No localStorage")]
    Unavailable,
    #[error("Failed to write `{0}` to storage")]
    Write(String),
    #[error("Failed to encode `{key}`: {reason}")]
    Encode { key: String, reason: String },
}

pub fn window() -> Result<Window, StorageError> {
    web_sys::window().ok_or(StorageError::NoWindow)
}

pub fn local_storage() -> Result<Storage, StorageError> {
    window()?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

/// Minimal key/value persistence used for the session pair.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Every read degrades to `None` when storage is
/// unreachable (private mode, host builds).
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove(&self, key: &str) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;

/// In-process store standing in for localStorage in host tests.
#[cfg(test)]
mod memory {
    use std::{cell::RefCell, collections::HashMap};

    use super::{KeyValueStore, StorageError};

    #[derive(Debug, Default)]
    pub struct MemoryStorage {
        entries: RefCell<HashMap<String, String>>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
            let store = Self::new();
            for (key, value) in entries {
                store
                    .entries
                    .borrow_mut()
                    .insert(key.to_string(), value.to_string());
            }
            store
        }

        pub fn len(&self) -> usize {
            self.entries.borrow().len()
        }

        pub fn is_empty(&self) -> bool {
            self.entries.borrow().is_empty()
        }
    }

    impl KeyValueStore for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }
}
