//! Menu panel host
//!
//! A toggle button in the map's menu bar that opens a panel below it. Which
//! panel is open lives in the shared `ViewState`, so opening one menu closes
//! the others. Components hosted here only supply the panel content.

use leptos::prelude::*;
use leptos::web_sys::MouseEvent;

use super::icon::Icon;
use super::view_state::ViewState;

const DEFAULT_BUTTON_CLASS: &str = "tjs-menu-panel__btn tjs-_buttons__btn tjs-_buttons__btn--map";
const DEFAULT_INNER_CLASS: &str = "tjs-menu-panel__inner";

/// Style classes for a menu panel
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DropdownTheme {
    /// Class of the panel content wrapper
    pub inner: String,
    /// Class of the toggle button, the map button style when `None`
    pub btn: Option<String>,
}

impl DropdownTheme {
    pub fn with_inner(inner: impl Into<String>) -> Self {
        Self {
            inner: inner.into(),
            btn: None,
        }
    }

    fn button_class(&self) -> String {
        self.btn
            .clone()
            .unwrap_or_else(|| DEFAULT_BUTTON_CLASS.to_string())
    }

    fn inner_class(&self) -> String {
        if self.inner.is_empty() {
            DEFAULT_INNER_CLASS.to_string()
        } else {
            format!("{} {}", DEFAULT_INNER_CLASS, self.inner)
        }
    }
}

/// Container class for the given layout and open state
fn container_class(small_screen: bool, is_open: bool) -> String {
    let mut class = String::from("tjs-menu-panel");
    if small_screen {
        class.push_str(" tjs-menu-panel--small-screen");
    }
    if is_open {
        class.push_str(" tjs-menu-panel--open");
    }
    class
}

/// Toggle button plus dropdown panel, open state owned by `ViewState`
#[component]
pub fn MenuPanel(
    /// Classes for the toggle button and the panel content
    theme: DropdownTheme,
    /// Toggle button text
    #[prop(into)]
    btn_text: String,
    /// Toggle button tooltip
    #[prop(optional, into)]
    btn_title: Option<String>,
    /// Optional icon shown before the button text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Whether the small screen layout is active
    #[prop(into)]
    small_screen: Signal<bool>,
    /// Shared view state
    view_state: ViewState,
    /// Identifies the panel in `ViewState`, defaults to the button text
    #[prop(optional, into)]
    panel_id: Option<String>,
    /// Panel content
    children: ChildrenFn,
) -> impl IntoView {
    let panel_id = StoredValue::new(panel_id.unwrap_or_else(|| btn_text.clone()));

    let is_open = move || panel_id.with_value(|id| view_state.is_open(id));

    let toggle = move |_: MouseEvent| {
        panel_id.with_value(|id| view_state.toggle_panel(id));
    };

    // Close panel when clicking outside
    let close_on_outside = move |_: MouseEvent| {
        if is_open() {
            view_state.close_panels();
        }
    };

    let aria_expanded = move || if is_open() { "true" } else { "false" };

    let button_class = theme.button_class();
    let inner_class = theme.inner_class();

    view! {
        <div class=move || container_class(small_screen.get(), is_open())>
            <button
                type="button"
                class=button_class
                title=btn_title
                on:click=toggle
                aria-haspopup="true"
                aria-expanded=aria_expanded
            >
                {icon.map(|name| view! { <Icon name=name class="tjs-menu-panel__icon"/> })}
                <span>{btn_text}</span>
            </button>

            <Show when=is_open>
                <div class="tjs-menu-panel__backdrop" on:click=close_on_outside></div>
                <div class=inner_class.clone() role="dialog">
                    {children()}
                </div>
            </Show>
        </div>
    }
}
