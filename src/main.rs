#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::sync::Arc;

#[allow(unused_imports)]
use rate_scope::{Cli, ForexApi, run_app};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// This keeps the WASM memory allocator from being stripped
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn _keep_alive() {}

// The compiler still wants a main() even though wasm uses 'start'.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    use rate_scope::config::FOREX_API;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Exchange Rates History Tracker starting in WASM mode...");

    let web_options = eframe::WebOptions::default();

    let data_source: rate_scope::SharedDataSource =
        Arc::new(ForexApi::new(FOREX_API.default_base_url));

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    let canvas = document
        .get_element_by_id("the_canvas_id")
        .expect("Failed to find canvas with id 'the_canvas_id'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    eframe::WebRunner::new()
        .start(
            canvas,
            web_options,
            Box::new(|cc| Ok(run_app(cc, data_source))),
        )
        .await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use clap::Parser;
    use eframe::NativeOptions;
    use rate_scope::config::persistence::APP_STATE_PATH;
    use std::path::PathBuf;
    use tokio::runtime::Runtime;

    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Cli::parse();
    let api_base = args.resolved_api_base();
    log::info!("Using forex backend at {api_base}");

    // Promise::spawn_async needs an ambient tokio runtime. Keep the guard
    // alive for the whole program.
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let _enter = rt.enter();

    let data_source: rate_scope::SharedDataSource = Arc::new(ForexApi::new(api_base));

    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        "Exchange Rates History Tracker",
        options,
        Box::new(move |cc| Ok(run_app(cc, data_source))),
    )
}
