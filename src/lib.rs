#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::{FetchError, ForexApi, RateDataSource, SharedDataSource};
pub use domain::{CurrencyCatalog, Period, RateFilter, RatePoint, RateSeries, SeriesRequest};
pub use ui::RateScopeApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the forex rates backend
    #[arg(long)]
    pub api_base: Option<String>,
}

impl Cli {
    /// Resolution order: CLI flag, then environment variable, then the
    /// compiled-in default.
    pub fn resolved_api_base(&self) -> String {
        if let Some(base) = &self.api_base {
            return base.clone();
        }
        if let Ok(base) = std::env::var(config::FOREX_API.base_url_env_var) {
            if !base.is_empty() {
                return base;
            }
        }
        config::FOREX_API.default_base_url.to_string()
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, data_source: SharedDataSource) -> Box<dyn eframe::App> {
    let app = ui::RateScopeApp::new(cc, data_source);
    Box::new(app)
}
