//! Key-value storage used to persist launcher credentials
//!
//! Provides:
//! - `KeyValueStore` trait (get/set/remove over string keys)
//! - `LocalStorage` backed by the browser's `window.localStorage`
//! - `MemoryStore` for injecting into the widget and for tests
//! - `get_persistent_item` accessor that folds absence into an empty string

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Storage error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("failed to remove {key}: {reason}")]
    Remove { key: String, reason: String },
}

/// String to string persistent storage.
///
/// Methods take `&self` like the browser `Storage` API does; implementations
/// that keep their own map use interior mutability.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to a store, as injected into components
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Read a key, returning an empty string when it is missing or unreadable
pub fn get_persistent_item(store: &dyn KeyValueStore, key: impl AsRef<str>) -> String {
    let key = key.as_ref();
    match store.get(key) {
        Ok(Some(value)) => value,
        Ok(None) => String::new(),
        Err(e) => {
            leptos::logging::debug_warn!("Reading {} from storage failed: {}", key, e);
            String::new()
        }
    }
}

/// Handle to `window.localStorage`.
///
/// The storage object is looked up on every call. During server rendering
/// there is no window, so reads see nothing and writes fail with
/// `StorageError::Unavailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(not(feature = "ssr"))]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        _ => Err(StorageError::Unavailable),
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(not(feature = "ssr"))]
        {
            browser_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read {
                    key: key.to_string(),
                    reason: format!("{:?}", e),
                })
        }
        #[cfg(feature = "ssr")]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(not(feature = "ssr"))]
        {
            browser_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write {
                    key: key.to_string(),
                    reason: format!("{:?}", e),
                })
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(not(feature = "ssr"))]
        {
            browser_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Remove {
                    key: key.to_string(),
                    reason: format!("{:?}", e),
                })
        }
        #[cfg(feature = "ssr")]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory store. Clones share the same map.
///
/// Server rendering does not use it: there `LocalStorage` simply reads
/// nothing.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given entries
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(map)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}
