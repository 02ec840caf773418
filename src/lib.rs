use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod application;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;

/// Initialize page behaviors when the wasm module loads
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    // Time provider first so the very first log line carries a real clock
    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    presentation::install_page_behaviors();

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Dashboard UI behaviors loaded successfully",
    );
}
