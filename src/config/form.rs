//! Prediction form defaults and limits

pub struct FormConfig {
    /// Oldest model year the year input accepts
    pub min_year: i32,
    /// Year preselected on first launch
    pub default_year: i32,
    /// Mileage preselected on first launch
    pub default_miles: f64,
    /// Upper bound of the mileage input
    pub max_miles: f64,
    /// Quiet period after the last keystroke before the model search fires
    pub search_debounce_ms: u64,
    /// Rolling prediction history length
    pub history_len: usize,
}

pub const FORM: FormConfig = FormConfig {
    min_year: 1990,
    default_year: 2018,
    default_miles: 50_000.0,
    max_miles: 1_000_000.0,
    search_debounce_ms: 300,
    history_len: 5,
};
