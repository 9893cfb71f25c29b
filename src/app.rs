use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};

use crate::ui::{LauncherAuth, provide_view_state};

/// Title used when the server does not provide one
pub const DEFAULT_APP_TITLE: &str = "eWaterCycle";

/// Document title, provided by the server as context
#[derive(Clone, Debug)]
pub struct AppTitle(pub String);

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let title = use_context::<AppTitle>()
        .map(|t| t.0)
        .unwrap_or_else(|| DEFAULT_APP_TITLE.to_string());

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let view_state = provide_view_state();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/ewatercycle-launcher-auth.css"/>

        <div class="tjs-standard-user-interface">
            <nav class=move || {
                if view_state.small_screen.get() {
                    "tjs-menu-bar tjs-menu-bar--small-screen"
                } else {
                    "tjs-menu-bar"
                }
            }>
                <LauncherAuth small_screen=view_state.small_screen view_state=view_state/>
            </nav>
            // the map itself is mounted here by the host application
            <div id="cesiumContainer" class="tjs-map"></div>
        </div>
    }
}
