//! Configuration module for the car price dashboard.

pub mod api;

mod debug; // Private on purpose: use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod form;
pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use api::{API, ApiConfig};
pub use form::{FORM, FormConfig};
pub use persistence::{APP_STATE_PATH, WEB_CANVAS_ID};
pub use plot::PLOT_CONFIG;
