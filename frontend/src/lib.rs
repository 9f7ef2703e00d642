use wasm_bindgen::prelude::wasm_bindgen;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

/// Browser entry point: panic hook, console logging, runtime config, mount.
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }
    log::info!("Starting News Portal frontend");

    // Config resolves in the background; API calls await it on first use.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized: {}", config::cached_api_base_url());
    });

    router::mount_app();
}
