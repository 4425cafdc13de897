#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod api;
pub mod config;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use api::{ApiClient, ApiError};
pub use models::{CarList, ModelStats, PredictionRequest, PredictionResponse, PredictionScatter};
pub use ui::{AppSettings, CarPriceApp};
pub use utils::app_time;

use std::time::Duration;

// CLI argument parsing
use clap::Parser;

use crate::config::API;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Origin of the prediction backend
    #[arg(long, env = "CAR_PRICE_API_BASE", default_value = API.default_base_url)]
    pub api_base: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = API.default_timeout_secs)]
    pub timeout_secs: u64,
}

impl From<Cli> for AppSettings {
    fn from(cli: Cli) -> Self {
        Self {
            api_base_url: cli.api_base,
            timeout: Duration::from_secs(cli.timeout_secs),
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    settings: AppSettings,
) -> Result<Box<dyn eframe::App>, ApiError> {
    let app = ui::CarPriceApp::new(cc, settings)?;
    Ok(Box::new(app))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_match_config() {
        let cli = Cli::try_parse_from(["car-price-dashboard"]).unwrap();
        let settings = AppSettings::from(cli);

        // The env var may be set on a developer machine
        if std::env::var_os("CAR_PRICE_API_BASE").is_none() {
            assert_eq!(settings.api_base_url, API.default_base_url);
        }
        assert_eq!(settings.timeout, Duration::from_secs(API.default_timeout_secs));
    }

    #[test]
    fn cli_overrides() {
        let cli = Cli::try_parse_from([
            "car-price-dashboard",
            "--api-base",
            "http://10.0.0.5:8000",
            "--timeout-secs",
            "3",
        ])
        .unwrap();
        let settings = AppSettings::from(cli);

        assert_eq!(settings.api_base_url, "http://10.0.0.5:8000");
        assert_eq!(settings.timeout, Duration::from_secs(3));
    }
}
