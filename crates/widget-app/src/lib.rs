//! Chat widget — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It resolves the host-page configuration, assembles the platform adapters,
//! and hands them to the egui UI.

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use widget_types::config::WidgetConfig;

/// WASM entry point — called from the host page
#[wasm_bindgen(start)]
pub async fn main() {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Chat widget WASM starting...");

    let config = read_host_config();

    // Launch the egui application
    let web_options = eframe::WebOptions::default();

    // Get the canvas element by ID
    let document = web_sys::window()
        .expect("No window")
        .document()
        .expect("No document");
    let canvas = document
        .get_element_by_id("chat_widget_canvas")
        .expect("No canvas element with id 'chat_widget_canvas'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("Element is not a canvas");

    wasm_bindgen_futures::spawn_local(async move {
        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::ChatWidgetApp::new(cc, config)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}

/// Read the host page's `window.chatWidgetConfig` JSON global. Absent or
/// malformed configuration falls back to the defaults with a warning; a bad
/// host page must not take the widget down.
fn read_host_config() -> WidgetConfig {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return WidgetConfig::default(),
    };

    let raw = js_sys::Reflect::get(&window, &JsValue::from_str("chatWidgetConfig"))
        .unwrap_or(JsValue::UNDEFINED);
    if raw.is_undefined() || raw.is_null() {
        return WidgetConfig::default();
    }

    let json = match js_sys::JSON::stringify(&raw) {
        Ok(json) => String::from(json),
        Err(_) => {
            log::warn!("chatWidgetConfig is not serializable, using defaults");
            return WidgetConfig::default();
        }
    };

    match serde_json::from_str(&json) {
        Ok(config) => {
            log::info!("Config loaded from host page");
            config
        }
        Err(e) => {
            log::warn!("Invalid chatWidgetConfig ({}), using defaults", e);
            WidgetConfig::default()
        }
    }
}
