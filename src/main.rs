#![warn(clippy::all)]

//! Stereonet Workbench - an interactive stereonet for structural-geology
//! orientation measurements.
//!
//! Planes and lines defined by dip/strike are validated, projected, and
//! drawn over a fixed reference grid, either as true 3D orientations or as
//! 2D traces on the flat net.

mod app;
mod events;
mod state;
mod stereo;
mod ui;

use app::StereonetApp;

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Stereonet Workbench",
        native_options,
        Box::new(|cc| Ok(Box::new(StereonetApp::new(cc)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("app_canvas")
            .expect("Failed to find app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("app_canvas was not a HtmlCanvasElement");

        if let Err(e) = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(StereonetApp::new(cc)))),
            )
            .await
        {
            panic!("Failed to start eframe: {e:?}");
        }
    });
}
