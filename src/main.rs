//! Portfolio Frontend Entry Point

mod models;
mod content;
mod nav;
mod controller;
mod context;
mod markdown;
mod components;
mod app;

use app::App;
use content::PortfolioContent;
use leptos::prelude::*;
use log::LevelFilter;
use rolling_logger::RollingLogger;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    match RollingLogger::init(rolling_logger::DEFAULT_CAPACITY, level) {
        // Dump buffered records ahead of the panic message
        Ok(_) => rolling_logger::install_panic_dump(),
        Err(err) => web_sys::console::warn_1(&format!("[APP] logger not installed: {}", err).into()),
    }

    let content = match PortfolioContent::embedded() {
        Ok(content) => {
            log::info!(
                "[CONTENT] loaded {} skills, {} projects",
                content.skills.len(),
                content.projects.len()
            );
            content
        }
        Err(err) => {
            log::error!("[CONTENT] {}; rendering fallback page", err);
            PortfolioContent::fallback()
        }
    };

    log::info!("[APP] mounting portfolio");
    mount_to_body(move || view! { <App content=content /> });
}
