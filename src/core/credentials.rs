//! Launcher credential pair and the storage keys it lives under.

use std::fmt;

use super::storage::{KeyValueStore, get_persistent_item};

/// Fixed local storage keys for the launcher credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKey {
    Username,
    Password,
}

impl CredentialKey {
    /// Both keys, in the order they are written
    pub const ALL: [CredentialKey; 2] = [CredentialKey::Username, CredentialKey::Password];

    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialKey::Username => "ewatercycle.launcher.username",
            CredentialKey::Password => "ewatercycle.launcher.password",
        }
    }
}

impl AsRef<str> for CredentialKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Username and password as typed by the user.
///
/// Nothing here is validated or hashed: the pair is stored as two plain
/// strings in browser local storage.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read both keys from the store, missing values become empty strings
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self::new(
            get_persistent_item(store, CredentialKey::Username),
            get_persistent_item(store, CredentialKey::Password),
        )
    }

    /// True when neither field is empty
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}
