//! Shared view state of the map user interface
//!
//! Provides:
//! - Which menu panel is open (at most one at a time)
//! - Small screen detection via a width media query, kept up to date

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Below this width the map switches to its small screen interface
pub const SMALL_SCREEN_QUERY: &str = "(max-width: 767px)";

/// View state shared by the map chrome and its menu panels
#[derive(Clone, Copy)]
pub struct ViewState {
    /// Id of the menu panel currently open
    pub open_panel: RwSignal<Option<String>>,
    /// Whether the small screen layout is active
    pub small_screen: RwSignal<bool>,
}

impl ViewState {
    pub fn new(small_screen: bool) -> Self {
        Self {
            open_panel: RwSignal::new(None),
            small_screen: RwSignal::new(small_screen),
        }
    }

    /// Whether the panel with `id` is open (reactive)
    pub fn is_open(&self, id: &str) -> bool {
        self.open_panel.with(|open| open.as_deref() == Some(id))
    }

    /// Open the panel, or close it when it is already open
    pub fn toggle_panel(&self, id: &str) {
        self.open_panel.update(|open| *open = toggled(open.as_deref(), id));
    }

    pub fn close_panels(&self) {
        self.open_panel.set(None);
    }
}

/// Opening one panel closes whichever other panel was open
fn toggled(open: Option<&str>, id: &str) -> Option<String> {
    match open {
        Some(current) if current == id => None,
        _ => Some(id.to_string()),
    }
}

/// Detect whether the viewport matches the small screen query
#[cfg_attr(feature = "ssr", allow(dead_code))]
fn detect_small_screen() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media(SMALL_SCREEN_QUERY) {
                return media_query.matches();
            }
        }
    }
    false
}

/// Provide view state to the application
pub fn provide_view_state() -> ViewState {
    // Server render and hydration both start from the wide layout
    let ctx = ViewState::new(false);

    // Follow viewport changes
    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let small_screen = ctx.small_screen;
        Effect::new(move |_| {
            small_screen.set(detect_small_screen());

            if let Some(window) = web_sys::window() {
                if let Ok(Some(media_query)) = window.match_media(SMALL_SCREEN_QUERY) {
                    let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                        move |e: web_sys::MediaQueryListEvent| {
                            small_screen.set(e.matches());
                        },
                    );

                    let _ = media_query
                        .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref());

                    // Keep the closure alive
                    handler.forget();
                }
            }
        });
    }

    provide_context(ctx);

    ctx
}
