//! Login/logout state of the launcher widget
//!
//! The widget is a pure function of what is persisted plus the text the user
//! has typed so far. `LauncherState` is that value; `LauncherState::apply`
//! is the only way it changes.

use std::fmt;

use super::credentials::{CredentialKey, Credentials};
use super::storage::{KeyValueStore, StorageError};

/// What the widget shows
#[derive(Clone, PartialEq, Eq)]
pub enum LauncherState {
    /// Login form with the current input values
    LoggedOut { username: String, password: String },
    /// Credentials are stored, only the logout button is shown
    LoggedIn,
}

impl Default for LauncherState {
    fn default() -> Self {
        LauncherState::LoggedOut {
            username: String::new(),
            password: String::new(),
        }
    }
}

impl fmt::Debug for LauncherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LauncherState::LoggedOut { username, .. } => f
                .debug_struct("LoggedOut")
                .field("username", username)
                .field("password", &"********")
                .finish(),
            LauncherState::LoggedIn => f.write_str("LoggedIn"),
        }
    }
}

/// User events the widget reacts to
#[derive(Clone, PartialEq, Eq)]
pub enum LauncherAction {
    UsernameChanged(String),
    PasswordChanged(String),
    Submit,
    LogOut,
}

impl fmt::Debug for LauncherAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LauncherAction::UsernameChanged(value) => {
                f.debug_tuple("UsernameChanged").field(value).finish()
            }
            LauncherAction::PasswordChanged(_) => {
                f.debug_tuple("PasswordChanged").field(&"********").finish()
            }
            LauncherAction::Submit => f.write_str("Submit"),
            LauncherAction::LogOut => f.write_str("LogOut"),
        }
    }
}

/// True when both credentials are stored and non-empty.
///
/// Always reads the store, never the typed values. There is no check that
/// the credentials are actually valid.
pub fn is_authenticated(store: &dyn KeyValueStore) -> bool {
    Credentials::load(store).is_complete()
}

impl LauncherState {
    /// Derive the state from what is currently persisted
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let stored = Credentials::load(store);
        if stored.is_complete() {
            LauncherState::LoggedIn
        } else {
            LauncherState::LoggedOut {
                username: stored.username,
                password: stored.password,
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, LauncherState::LoggedIn)
    }

    /// Value of one form input, empty while logged in
    pub fn field(&self, key: CredentialKey) -> &str {
        match (self, key) {
            (LauncherState::LoggedOut { username, .. }, CredentialKey::Username) => username.as_str(),
            (LauncherState::LoggedOut { password, .. }, CredentialKey::Password) => password.as_str(),
            (LauncherState::LoggedIn, _) => "",
        }
    }

    /// Compute the state after `action`.
    ///
    /// Typing only touches the form. `Submit` writes both fields and then
    /// re-derives the state from the store, so submitting with an empty field
    /// leaves the form showing. `LogOut` removes both keys and may be repeated.
    /// On error `self` is still the valid state, although a failed submit may
    /// already have written the username.
    pub fn apply(
        &self,
        action: LauncherAction,
        store: &dyn KeyValueStore,
    ) -> Result<Self, StorageError> {
        match (self, action) {
            (LauncherState::LoggedOut { password, .. }, LauncherAction::UsernameChanged(value)) => {
                Ok(LauncherState::LoggedOut {
                    username: value,
                    password: password.clone(),
                })
            }
            (LauncherState::LoggedOut { username, .. }, LauncherAction::PasswordChanged(value)) => {
                Ok(LauncherState::LoggedOut {
                    username: username.clone(),
                    password: value,
                })
            }
            (LauncherState::LoggedOut { username, password }, LauncherAction::Submit) => {
                store.set(CredentialKey::Username.as_str(), username)?;
                store.set(CredentialKey::Password.as_str(), password)?;
                // TODO: verify the credentials against the launcher before showing logout
                Ok(Self::load(store))
            }
            (_, LauncherAction::LogOut) => {
                for key in CredentialKey::ALL {
                    store.remove(key.as_str())?;
                }
                Ok(LauncherState::default())
            }
            (LauncherState::LoggedIn, _) => Ok(LauncherState::LoggedIn),
        }
    }
}
