//! Protected Staking Web App
//!
//! Leptos frontend for depositing ETH into the protected staking contract
//! through an injected Ethereum wallet.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger (also receives `tracing` events from lib-core)
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Protected Staking starting...");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen from index.html.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, loading screen left in place");
        return;
    };

    match document.get_element_by_id("leptos-loading") {
        Some(loading_element) => {
            if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
                if let Err(e) = html_element.class_list().add_1("hidden") {
                    log::warn!("Failed to hide loading screen: {:?}", e);
                }
            }
        }
        None => log::debug!("Loading element not found"),
    }
}
