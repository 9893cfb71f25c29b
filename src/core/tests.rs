#[cfg(test)]
mod tests {
    use crate::core::{
        CredentialKey, Credentials, KeyValueStore, LauncherAction, LauncherState, MemoryStore,
        is_authenticated,
    };

    fn submit(store: &MemoryStore, username: &str, password: &str) -> LauncherState {
        LauncherState::load(store)
            .apply(LauncherAction::UsernameChanged(username.to_string()), store)
            .and_then(|s| s.apply(LauncherAction::PasswordChanged(password.to_string()), store))
            .and_then(|s| s.apply(LauncherAction::Submit, store))
            .unwrap()
    }

    fn stored(store: &MemoryStore, key: CredentialKey) -> Option<String> {
        store.get(key.as_str()).unwrap()
    }

    #[test]
    fn test_submit_non_empty_credentials_logs_in() {
        let pairs = [("alice", "secret"), ("a", "b"), ("user name", "p@ss w0rd")];

        for (username, password) in pairs {
            let store = MemoryStore::new();
            let state = submit(&store, username, password);

            assert_eq!(state, LauncherState::LoggedIn);
            assert!(is_authenticated(&store));
            assert_eq!(stored(&store, CredentialKey::Username).as_deref(), Some(username));
            assert_eq!(stored(&store, CredentialKey::Password).as_deref(), Some(password));
        }
    }

    #[test]
    fn test_logout_clears_everything() {
        let store = MemoryStore::new();
        let state = submit(&store, "alice", "secret");

        let state = state.apply(LauncherAction::LogOut, &store).unwrap();

        assert_eq!(stored(&store, CredentialKey::Username), None);
        assert_eq!(stored(&store, CredentialKey::Password), None);
        assert!(!is_authenticated(&store));
        assert_eq!(state, LauncherState::default());
    }

    #[test]
    fn test_logout_from_form_clears_typed_values() {
        let store = MemoryStore::new();
        let state = LauncherState::LoggedOut {
            username: "half".to_string(),
            password: "typed".to_string(),
        };

        let state = state.apply(LauncherAction::LogOut, &store).unwrap();
        assert_eq!(state, LauncherState::default());
    }

    #[test]
    fn test_partial_credentials_are_not_authenticated() {
        let cases = [
            (Some("alice"), Some("")),
            (Some(""), Some("secret")),
            (Some("alice"), None),
            (None, Some("secret")),
            (None, None),
        ];

        for (username, password) in cases {
            let store = MemoryStore::new();
            if let Some(u) = username {
                store.set(CredentialKey::Username.as_str(), u).unwrap();
            }
            if let Some(p) = password {
                store.set(CredentialKey::Password.as_str(), p).unwrap();
            }

            assert!(
                !is_authenticated(&store),
                "username={:?} password={:?}",
                username,
                password
            );
            assert!(!LauncherState::load(&store).is_logged_in());
        }
    }

    #[test]
    fn test_logout_twice_equals_once() {
        let once = MemoryStore::new();
        let twice = MemoryStore::new();
        let state_once = submit(&once, "alice", "secret")
            .apply(LauncherAction::LogOut, &once)
            .unwrap();
        let state_twice = submit(&twice, "alice", "secret")
            .apply(LauncherAction::LogOut, &twice)
            .and_then(|s| s.apply(LauncherAction::LogOut, &twice))
            .unwrap();

        assert_eq!(state_once, state_twice);
        assert_eq!(once.len(), twice.len());
        assert!(twice.is_empty());
    }

    #[test]
    fn test_submit_then_reload_restores_form_values() {
        let store = MemoryStore::new();
        submit(&store, "alice", "secret");

        // A fresh widget over the same storage sees what was submitted
        assert_eq!(Credentials::load(&store), Credentials::new("alice", "secret"));
        assert_eq!(LauncherState::load(&store), LauncherState::LoggedIn);
    }

    #[test]
    fn test_reload_after_incomplete_submit_restores_form() {
        let store = MemoryStore::new();
        submit(&store, "alice", "");

        assert_eq!(
            LauncherState::load(&store),
            LauncherState::LoggedOut {
                username: "alice".to_string(),
                password: String::new(),
            }
        );
    }

    #[test]
    fn test_fresh_storage_shows_empty_form() {
        let store = MemoryStore::new();
        let state = LauncherState::load(&store);

        assert!(!state.is_logged_in());
        assert_eq!(state, LauncherState::default());
    }

    #[test]
    fn test_prepopulated_storage_logs_out() {
        let store = MemoryStore::with_entries([
            (CredentialKey::Username.as_str(), "bob"),
            (CredentialKey::Password.as_str(), "hunter2"),
        ]);

        let state = LauncherState::load(&store);
        assert_eq!(state, LauncherState::LoggedIn);

        let state = state.apply(LauncherAction::LogOut, &store).unwrap();
        assert!(store.is_empty());
        assert_eq!(LauncherState::load(&store), state);
        assert_eq!(state, LauncherState::default());
    }

    #[test]
    fn test_resubmit_overwrites_previous_credentials() {
        let store = MemoryStore::new();
        submit(&store, "alice", "secret");
        LauncherState::LoggedIn
            .apply(LauncherAction::LogOut, &store)
            .unwrap();
        submit(&store, "bob", "hunter2");

        assert_eq!(Credentials::load(&store), Credentials::new("bob", "hunter2"));
    }

    #[test]
    fn test_unrelated_keys_survive_logout() {
        let store = MemoryStore::with_entries([("terria.settings", "{}")]);
        submit(&store, "alice", "secret")
            .apply(LauncherAction::LogOut, &store)
            .unwrap();

        assert!(store.contains_key("terria.settings"));
        assert_eq!(store.len(), 1);
    }
}
