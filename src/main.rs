#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;
mod web;

use tracing::Level;

fn main() {
    // Routes tracing to the browser console
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }

    tracing::info!("Starting WingsPay landing page");

    dioxus::LaunchBuilder::web().launch(app::App);
}
