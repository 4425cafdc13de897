//! File persistence configuration

/// Path for saving/loading application UI state (native builds)
pub const APP_STATE_PATH: &str = ".car_price_dashboard.json";

/// Id of the `<canvas>` element the browser build renders into
pub const WEB_CANVAS_ID: &str = "the_canvas_id";
