//! # bugtracker-ui
//!
//! Leptos + WASM frontend for the bug tracker application.
//!
//! This crate contains pages, components, application state, and the REST
//! API client for the bug collection. Create, edit, and delete run through
//! modal dialogs; success notifications are driven by route query
//! parameters.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
