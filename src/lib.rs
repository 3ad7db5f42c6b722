//! # startup-panel
//!
//! Leptos + WASM frontend for a game-server panel's startup settings.
//!
//! The page lists the server's startup variables and renders each one as a
//! switch, select or text field depending on its validation rules. Edits are
//! debounced and saved through the panel's client API, and the response is
//! merged back into the shared startup state.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install console hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
