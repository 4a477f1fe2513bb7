/// Article Compass - save the current tab, swipe through it later
/// Built with Rust + WASM + Yew

pub mod api;
pub mod article;
pub mod config;
pub mod gesture;
pub mod reader_state;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the Yew app for the extension popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// Start the Yew app for the reader page
#[wasm_bindgen]
pub fn start_reader() {
    yew::Renderer::<ui::reader::Reader>::new().render();
}
