//! BRCLOG contact landing page
//!
//! A localized contact form with progressive phone formatting, posting to the
//! mail-sending endpoint, next to the company's branding content. Built with
//! Leptos: rendered by the axum server and hydrated in the browser.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
