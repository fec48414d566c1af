//! # seqrview-web
//!
//! Leptos + WASM frontend for the seqrview exam-operations console: routed
//! admin views behind an auth guard, a token-based session store mirrored
//! to local storage, and an HTTP layer that silently refreshes an expired
//! access credential.
//!
//! The backend API is a separate service; this crate only consumes its
//! auth endpoints and gates navigation on the resulting session.

pub mod app;
pub mod layouts;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
