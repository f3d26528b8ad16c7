pub mod api;
pub mod common;
pub mod config;
pub mod data;
pub mod frontend;
pub mod models;
pub mod services;
#[cfg(feature = "ssr")]
pub mod web;

/// WASM hydration entry point
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    leptos::mount::hydrate_body(frontend::App);
}
