//! Bono Desktop Application
//!
//! Paste links, sort them into folders and tags, and tick them off once read.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "bono=debug".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Bono...");

    let window = WindowBuilder::new()
        .with_title("보노보노 언제보노")
        .with_resizable(true);
    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
