#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod i18n;
pub mod pages;
pub mod router;
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod tap_driver;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::warn_1(&format!("logger already initialised: {err}").into());
    }
    log::info!("PolicyPlay API at {}", config::api_endpoint().api_url());
    yew::Renderer::<app::App>::new().render();
}
