//! # chaingate-client
//!
//! Leptos + WASM administrative dashboard for the ChainGate NFC access
//! control system.
//!
//! This crate contains the route pages, dashboard sections, presentation
//! components, application state (session store, auth gate, navigation,
//! toasts), and the REST client for the remote access-control API.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod sections;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
