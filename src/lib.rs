use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;

#[cfg(feature = "gateway")]
pub mod gateway;

mod macros;

/// Initialize logging and panic reporting for the WASM module
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Record browser module initialized",
    );
}

/// Mount the Leptos record browser into the document body
#[wasm_bindgen]
pub fn mount_record_browser() {
    get_logger().info(LogComponent::Presentation("Mount"), "📊 Mounting record browser");
    leptos::mount_to_body(app::App);
}
