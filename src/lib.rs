//! # router7
//!
//! Leptos + WASM single-page routing demo: a client-side router with a
//! login gate, a users list, and a user-detail page backed by the public
//! JSONPlaceholder API.
//!
//! This crate contains pages, components, the typed route table, session
//! state, and the REST fetchers. Browser-only behavior (localStorage,
//! `fetch`, console logging) is gated behind the `hydrate` feature so the
//! crate and its tests also compile natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
