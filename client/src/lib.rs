//! # client
//!
//! Leptos + WASM front end for the activity sign-up board.
//!
//! The board fetches every activity from the server, renders one card per
//! activity with its roster, and lets a user sign up or unregister an email.
//! Every mutation is followed by a full re-fetch; nothing is patched locally.
//!
//! Browser-only code sits behind the `csr` feature. Without it the crate
//! builds natively and the state, view-model and controller modules run under
//! plain `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::BoardConfig;

    console_error_panic_hook::set_once();

    let (config, config_error) = match BoardConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(err) => (BoardConfig::default(), Some(err)),
    };
    if console_log::init_with_level(config.log_level).is_err() {
        leptos::logging::warn!("logger already initialized");
    }
    if let Some(err) = config_error {
        log::warn!("invalid build configuration, using defaults: {err}");
    }
    log::info!("activity board starting api_base={:?}", config.api_base);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
