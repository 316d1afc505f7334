//! # bottombar
//!
//! Leptos + WASM bottom status bar for a web map viewer.
//!
//! The bar shows the live cursor coordinates, a selector for the CRS those
//! coordinates are displayed in, a map-scale selector, and optional footer
//! links. It never mutates viewer state directly: every change it wants is
//! emitted as an [`intent::Intent`] and applied by the host through
//! [`state::AppState::dispatch`], which owns the `mousePosition` reducer
//! contributed by this crate.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod intent;
pub mod state;
pub mod util;
pub mod view_model;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already initialised: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
