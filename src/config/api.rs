//! Backend connection settings

/// Routes exposed by the prediction backend.
pub struct Endpoints {
    pub cars: &'static str,
    pub predict: &'static str,
    pub model_stats: &'static str,
    pub prediction_scatter: &'static str,
}

pub struct ApiConfig {
    /// Origin every endpoint is resolved against (no trailing slash)
    pub default_base_url: &'static str,
    /// Request timeout for native builds. The browser enforces its own.
    pub default_timeout_secs: u64,
    /// Query parameter used by the model search box
    pub search_param: &'static str,
    pub endpoints: Endpoints,
}

pub const API: ApiConfig = ApiConfig {
    default_base_url: "http://localhost:5000",
    default_timeout_secs: 15,
    search_param: "search",
    endpoints: Endpoints {
        cars: "/cars",
        predict: "/predict",
        model_stats: "/model-stats",
        prediction_scatter: "/prediction-scatter",
    },
};
