//! Credential persistence and login state for the launcher widget

#[cfg(feature = "ssr")]
pub mod config;
mod credentials;
mod launcher;
mod storage;
#[cfg(test)]
mod tests;

pub use credentials::{CredentialKey, Credentials};
pub use launcher::{LauncherAction, LauncherState, is_authenticated};
pub use storage::{
    KeyValueStore, LocalStorage, MemoryStore, SharedStore, StorageError, get_persistent_item,
};
