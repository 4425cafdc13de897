pub mod app_time;
pub mod debounce;

pub use debounce::Debouncer;
