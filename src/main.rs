#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use car_price_dashboard::{AppSettings, run_app};

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast; // REQUIRED for .dyn_into()
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Even though we use 'start', the compiler still wants a main() function
// because this file is compiled as a binary.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    use car_price_dashboard::config::WEB_CANVAS_ID;

    // A. Init Logging
    console_error_panic_hook::set_once();
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    log::info!("🚀 Car price dashboard starting in WASM mode...");

    // B. Setup for Web (no CLI in the browser: defaults only)
    let web_options = eframe::WebOptions::default();
    let settings = AppSettings::default();

    // C. Find the canvas element by ID
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("no global `window` or `document` exists")?;
    let canvas = document
        .get_element_by_id(WEB_CANVAS_ID)
        .ok_or_else(|| format!("Failed to find canvas with id '{}'", WEB_CANVAS_ID))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| format!("{} was not a valid HtmlCanvasElement", WEB_CANVAS_ID))?;

    // D. Start the App
    eframe::WebRunner::new()
        .start(
            canvas,
            web_options,
            Box::new(move |cc| run_app(cc, settings).map_err(into_dyn_error)),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use car_price_dashboard::Cli;
    use car_price_dashboard::config::APP_STATE_PATH;
    use clap::Parser;
    use eframe::NativeOptions;
    use std::path::PathBuf;
    use tokio::runtime::Runtime;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);
    let settings = AppSettings::from(args);

    // C. Runtime for backend calls; entered so the UI thread can spawn onto it
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    let _guard = rt.enter();

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        "Car Price Predictor",
        options,
        Box::new(move |cc| run_app(cc, settings).map_err(into_dyn_error)),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {e}"))
}

/// eframe wants app-creation failures as a boxed `dyn Error`.
fn into_dyn_error(
    err: car_price_dashboard::ApiError,
) -> Box<dyn std::error::Error + Send + Sync> {
    Box::new(err)
}
