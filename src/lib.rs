use leptos::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::app::{App, LeptosLogger};
use crate::config::AppConfig;
use crate::domain::logging::{self, LogScope};
use crate::infrastructure::services::ConsoleLogger;

pub mod app;
pub mod application;
pub mod config;
pub mod debug_log;
pub mod domain;
pub mod infrastructure;
pub mod time_utils;

/// Browser entry point: installs the panic hook and log sink, then mounts
/// the calculator page.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_location();
    let console = ConsoleLogger::new(config.log_level);
    if config.debug_console {
        logging::install_sink(Box::new(LeptosLogger::new(console)));
    } else {
        logging::install_sink(Box::new(console));
    }

    crate::log_info!(
        LogScope::Startup,
        "RDA calculator starting (log level {}, debug console {})",
        config.log_level,
        config.debug_console
    );

    mount_to_body(move || view! { <App config=config /> });
}
