//! Browser entry point: installs logging and mounts the blog app.

use app::App;
use jumper_core::Config;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Site configuration bundled into the wasm binary.
const SITE_CONFIG: &str = include_str!("../config.toml");

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    match Config::from_toml_str(SITE_CONFIG) {
        Ok(config) => {
            log::info!("mounting {}", config.site.title);
            leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
        }
        Err(err) => log::error!("invalid site configuration: {err}"),
    }
}
