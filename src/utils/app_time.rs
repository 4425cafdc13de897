// src/utils/app_time.rs

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> AppInstant {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> AppInstant {
    web_time::Instant::now()
}

/// Wall-clock timestamp for display, e.g. `14:03:27`.
pub fn clock_label() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Latest model year the form offers (next year's models are already on sale).
pub fn latest_model_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year() + 1
}
