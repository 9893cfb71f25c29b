//! eWaterCycle launcher auth
//!
//! Login/logout widget for the eWaterCycle map, keeping the experiment
//! launcher credentials in browser local storage. Built with Leptos and
//! WebAssembly.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
