//! Markpane - markdown directory browser with editor and live preview
//!
//! Browse the markdown files of a directory tree, edit one in a plain-text
//! pane and watch the rendered result next to it.

mod app;
mod config;
mod core;
mod ui;

use anyhow::Result;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app::{MarkpaneApp, WINDOW_TITLE};
use config::{AppConfig, Cli};

fn main() -> Result<()> {
    let config = AppConfig::from(Cli::parse());

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting Markpane...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([400.0, 300.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        "Markpane",
        native_options,
        Box::new(move |_cc| Ok(Box::new(MarkpaneApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run window: {e}"))
}
