pub mod app;
pub mod domain;
pub mod shared;

use leptos::prelude::*;
use shared::config::{load_config, Config, CONFIG_ELEMENT_ID};
use shared::dom::embedded_text;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let override_toml = embedded_text(CONFIG_ELEMENT_ID);
    let (config, config_error) = match load_config(override_toml.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.logging.log_level());
    console_error_panic_hook::set_once();

    if let Some(e) = config_error {
        log::warn!("Using default configuration: {:#}", e);
    }

    leptos::mount::mount_to_body(move || view! { <app::App config=config.clone() /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
