//! # fishcast-client
//!
//! Leptos + WASM frontend for FishCast, a recreational-fishing companion.
//!
//! This crate contains pages, components, application state, the session
//! store with its route guard, and the spot-analysis upload client. The
//! root `fishcast` binary server-renders it with the `ssr` feature; the
//! browser bundle is built with `hydrate`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Entry point called from the WASM bundle to hydrate server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
