//! Runtime configuration from command-line flags and environment

use std::path::PathBuf;

use clap::Parser;

/// Browse a directory of markdown documents with a live preview
#[derive(Debug, Parser)]
#[command(name = "markpane", version, about)]
pub struct Cli {
    /// Directory to browse, or a markdown file to open
    pub path: Option<PathBuf>,

    /// Log filter, e.g. `info` or `markpane=debug`
    #[arg(long, env = "MARKPANE_LOG", default_value = "info")]
    pub log_level: String,

    /// Initial window width in points
    #[arg(long, default_value_t = 1200.0)]
    pub width: f32,

    /// Initial window height in points
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path opened at startup
    pub initial_path: Option<PathBuf>,
    /// Tracing filter directive
    pub log_level: String,
    /// Initial inner window size
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_path: None,
            log_level: "info".to_string(),
            window_size: [1200.0, 800.0],
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            initial_path: cli.path,
            log_level: cli.log_level,
            window_size: [cli.width.max(400.0), cli.height.max(300.0)],
        }
    }
}
