//! CarryPack Logistics - marketing site
//!
//! Single-page site for a moving company with a validated quote form and a
//! scripted help chat, built with Leptos (server-side rendering on axum,
//! hydration via WebAssembly).

#![recursion_limit = "4096"]

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
