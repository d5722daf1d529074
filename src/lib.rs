/// Pixiv Navigator - Chrome extension that turns Pixiv IDs and keywords
/// into website URLs
/// Built with Rust + WASM + Yew

pub mod controller;
pub mod extract;
pub mod history;
pub mod storage;
pub mod ui;
pub mod urls;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export ID extraction for JavaScript access
#[wasm_bindgen]
pub fn extract_ids(text: &str) -> Vec<String> {
    extract::extract(text)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
