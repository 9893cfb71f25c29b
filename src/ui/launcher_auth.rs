//! Launcher login/logout widget
//!
//! Shows a logout button while launcher credentials are stored, otherwise a
//! login form in a menu panel. Credentials go to local storage as typed;
//! nothing is verified.

use std::sync::Arc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::icon::{Icon, icons};
use super::menu_panel::{DropdownTheme, MenuPanel};
use super::view_state::ViewState;
use crate::core::{CredentialKey, LauncherAction, LauncherState, LocalStorage, SharedStore};

const PANEL_ID: &str = "launcher-auth";
const DROPDOWN_INNER_CLASS: &str = "tjs-related-maps__dropdown-inner";
const LOGOUT_BUTTON_CLASS: &str = "tjs-panel__button tjs-_buttons__btn tjs-_buttons__btn--map";
const INPUT_CLASS: &str = "tjs-_form__field tjs-_form__input";
const SUBMIT_BUTTON_CLASS: &str = "tjs-_buttons__btn tjs-_buttons__btn-primary";
const HEADING: &str = "Login to start experiments";

/// Login/logout control for the experiment launcher
#[component]
pub fn LauncherAuth(
    /// Whether the map uses its small screen layout
    #[prop(into)]
    small_screen: Signal<bool>,
    /// Shared view state of the map, hosts the login menu panel
    view_state: ViewState,
    /// Where credentials are kept, browser local storage when omitted
    #[prop(optional)]
    store: Option<SharedStore>,
) -> impl IntoView {
    // An injected store is readable right away. Browser storage only exists
    // on the client, so it is loaded after hydration.
    let state = RwSignal::new(match &store {
        Some(s) => LauncherState::load(s.as_ref()),
        None => LauncherState::default(),
    });
    let load_after_hydration = store.is_none();
    let store = StoredValue::new(
        store.unwrap_or_else(|| Arc::new(LocalStorage) as SharedStore),
    );

    if load_after_hydration {
        Effect::new(move |_| {
            state.set(store.with_value(|s| LauncherState::load(s.as_ref())));
        });
    }

    let dispatch = move |action: LauncherAction| {
        let current = state.get_untracked();
        match store.with_value(|s| current.apply(action, s.as_ref())) {
            Ok(next) => {
                if next.is_logged_in() != current.is_logged_in() {
                    leptos::logging::log!("Launcher auth: {:?} -> {:?}", current, next);
                }
                state.set(next);
            }
            Err(e) => {
                leptos::logging::error!("Failed to update launcher credentials: {}", e);
            }
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        dispatch(LauncherAction::Submit);
        if state.with_untracked(LauncherState::is_logged_in) {
            view_state.close_panels();
        }
    };

    let username = move || state.with(|s| s.field(CredentialKey::Username).to_string());
    let password = move || state.with(|s| s.field(CredentialKey::Password).to_string());

    let login_form = move || {
        view! {
            <MenuPanel
                theme=DropdownTheme::with_inner(DROPDOWN_INNER_CLASS)
                btn_text="Login"
                btn_title=HEADING
                icon=icons::SIGN_IN
                small_screen=small_screen
                view_state=view_state
                panel_id=PANEL_ID
            >
                <div class="tjs-panel__header">
                    <label class="tjs-panel__heading">{HEADING}</label>
                </div>
                <form on:submit=on_submit>
                    <label>
                        "Username"
                        <input
                            class=INPUT_CLASS
                            type="text"
                            name="username"
                            autocomplete="username"
                            prop:value=username
                            on:input=move |ev| {
                                dispatch(LauncherAction::UsernameChanged(event_target_value(&ev)));
                            }
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            class=INPUT_CLASS
                            type="password"
                            name="password"
                            autocomplete="current-password"
                            prop:value=password
                            on:input=move |ev| {
                                dispatch(LauncherAction::PasswordChanged(event_target_value(&ev)));
                            }
                        />
                    </label>
                    <button class=SUBMIT_BUTTON_CLASS type="submit">"Login"</button>
                </form>
            </MenuPanel>
        }
    };

    view! {
        <Show
            when=move || state.with(LauncherState::is_logged_in)
            fallback=login_form
        >
            <div class="tjs-panel__panel">
                <button
                    type="button"
                    class=LOGOUT_BUTTON_CLASS
                    title="Logout"
                    on:click=move |_| dispatch(LauncherAction::LogOut)
                >
                    <Icon name=icons::SIGN_OUT class="tjs-launcher-auth__icon"/>
                    <span>"Logout"</span>
                </button>
            </div>
        </Show>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::MemoryStore;
    use leptos::tachys::view::RenderHtml;

    fn render(store: MemoryStore, open_login: bool) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let view_state = ViewState::new(false);
            if open_login {
                view_state.toggle_panel(PANEL_ID);
            }
            let store: SharedStore = Arc::new(store);
            view! {
                <LauncherAuth small_screen=false view_state=view_state store=store/>
            }
            .to_html()
        })
    }

    fn bob() -> MemoryStore {
        MemoryStore::with_entries([
            (CredentialKey::Username.as_str(), "bob"),
            (CredentialKey::Password.as_str(), "hunter2"),
        ])
    }

    #[test]
    fn test_stored_credentials_render_logout_button() {
        let html = render(bob(), false);

        assert!(html.contains("tjs-panel__panel"));
        assert!(html.contains(LOGOUT_BUTTON_CLASS));
        assert!(html.contains(r#"title="Logout""#));
        assert!(html.contains("Logout"));
        assert!(!html.contains("<form"));
        assert!(!html.contains(HEADING));
    }

    #[test]
    fn test_stored_credentials_ignore_open_panel() {
        let html = render(bob(), true);

        assert!(html.contains(LOGOUT_BUTTON_CLASS));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_fresh_storage_renders_login_form() {
        let html = render(MemoryStore::new(), true);

        assert!(!html.contains("tjs-panel__panel"));
        assert!(html.contains(DROPDOWN_INNER_CLASS));
        assert!(html.contains("tjs-panel__header"));
        assert!(html.contains("tjs-panel__heading"));
        assert!(html.contains(HEADING));
        assert!(html.contains("<form"));
        assert!(html.contains("Username"));
        assert!(html.contains(r#"type="text""#));
        assert!(html.contains("Password"));
        assert!(html.contains(r#"type="password""#));
        assert!(html.contains(INPUT_CLASS));
        assert!(html.contains(SUBMIT_BUTTON_CLASS));
        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains(r#"aria-expanded="true""#));
    }

    #[test]
    fn test_closed_login_panel_shows_only_toggle() {
        let html = render(MemoryStore::new(), false);

        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(&format!(r#"title="{}""#, HEADING)));
        assert!(html.contains("Login"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_partial_credentials_render_login_form() {
        let store = MemoryStore::with_entries([(CredentialKey::Username.as_str(), "alice")]);
        let html = render(store, true);

        assert!(html.contains("<form"));
        assert!(!html.contains("tjs-panel__panel"));
    }

    #[test]
    fn test_logout_then_render_shows_login_form() {
        let store = bob();
        LauncherState::load(&store)
            .apply(LauncherAction::LogOut, &store)
            .unwrap();

        let html = render(store, true);
        assert!(html.contains("<form"));
        assert!(!html.contains(LOGOUT_BUTTON_CLASS));
    }
}
