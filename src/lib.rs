//! # campus-dispatch
//!
//! Leptos + WASM frontend for the Campus Dispatch authentication screen.
//! Renders a login / sign-up toggle form and talks to the auth backend over
//! two JSON endpoints.
//!
//! This crate contains the route-level pages, the DOM-free form state model
//! (`state`), and the wire DTOs plus HTTP dispatch (`net`).

pub mod app;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install the panic hook and console logger, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
