#![recursion_limit = "256"]
//! School Site Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod fields;
mod models;
mod news;
mod route;
mod store;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;
use route::Route;

fn main() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::from_document();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", e).into());
    }

    let route = Route::from_path(&commands::current_path());
    log::info!("[APP] mounting {:?} (endpoint {})", route, config.apply_endpoint);

    mount_to_body(move || view! { <App config=config route=route /> });
}
