//! WLM Bot Dashboard - Yew WASM Frontend
//!
//! This crate provides the admin web UI for the WLM community-management
//! bot: a status-gated shell with a sidebar, a header, and four routed
//! pages backed by the bot's local HTTP API.

mod app;
mod components;
mod config;
mod fetch;
mod format;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
