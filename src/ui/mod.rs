// User interface components
pub mod analytics_view;
pub mod app;
pub mod app_async;
pub mod config;
pub mod layout;
pub mod plot_layers;
pub mod predict_view;
pub mod styles;
pub mod ui_panels;
pub mod ui_plot_view;
pub mod utils;

// Re-export main app
pub use app::{AppSettings, CarPriceApp, Page};
pub use config::{UI_CONFIG, UI_TEXT};
