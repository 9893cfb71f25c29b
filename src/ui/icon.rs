use leptos::prelude::*;

/// Icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "tjs-icon")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = icon_path(name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

fn icon_path(name: &str) -> String {
    format!("/icons/{}.svg", name)
}

/// Icons shipped in public/icons
pub mod icons {
    pub const SIGN_IN: &str = "sign-in";
    pub const SIGN_OUT: &str = "sign-out";
}
