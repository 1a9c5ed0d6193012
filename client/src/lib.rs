//! # coursewave-client
//!
//! Leptos + WASM frontend for the Coursewave landing page.
//!
//! This crate contains the landing page, its section components, per-section
//! state, the site content model, and the image preloader that gates
//! image-heavy sections until their assets have settled. Built with `ssr` for
//! the server and `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod preload;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating landing page");
    leptos::mount::hydrate_body(app::App);
}
