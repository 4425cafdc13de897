use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub price: Color32,
    pub error: Color32,
    pub accent: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub model_list_height: f32,
    pub metric_card_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::YELLOW, // Sets every heading
        subsection_heading: Color32::ORANGE, // Sets every subsection heading
        central_panel: Color32::from_rgb(30, 30, 36),
        side_panel: Color32::from_rgb(25, 25, 25),
        price: Color32::from_rgb(130, 200, 140),
        error: Color32::from_rgb(255, 100, 100),
        accent: Color32::from_rgb(100, 200, 255),
    },
    model_list_height: 260.0,
    metric_card_width: 150.0,
};

/// Every user-facing string in one place.
pub struct UiText {
    pub app_title: &'static str,
    pub nav_predict: &'static str,
    pub nav_analytics: &'static str,

    // Prediction page
    pub search_heading: &'static str,
    pub search_hint: &'static str,
    pub model_list_heading: &'static str,
    pub no_models: &'static str,
    pub loading_models: &'static str,
    pub loading_metrics: &'static str,
    pub loading_scatter: &'static str,
    pub form_heading: &'static str,
    pub year_label: &'static str,
    pub miles_label: &'static str,
    pub selected_model_label: &'static str,
    pub no_model_selected: &'static str,
    pub submit_button: &'static str,
    pub predicting: &'static str,
    pub result_heading: &'static str,
    pub history_heading: &'static str,
    pub history_empty: &'static str,
    pub clear_history: &'static str,

    // Analytics page
    pub metrics_heading: &'static str,
    pub scatter_heading: &'static str,
    pub price_distribution_heading: &'static str,
    pub year_distribution_heading: &'static str,
    pub accuracy_heading: &'static str,
    pub refresh_button: &'static str,
    pub scatter_x_axis: &'static str,
    pub scatter_y_axis: &'static str,
    pub scatter_points_label: &'static str,
    pub ideal_line_label: &'static str,
    pub count_axis: &'static str,
    pub mae_axis: &'static str,
    pub no_scatter_points: &'static str,

    // Static failure messages
    pub cars_failed: &'static str,
    pub predict_failed: &'static str,
    pub stats_failed: &'static str,
    pub scatter_failed: &'static str,

    // Status bar
    pub backend_label: &'static str,
    pub in_flight_label: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "🚗 Car Price Predictor",
    nav_predict: "Predict",
    nav_analytics: "Model Analytics",

    search_heading: "Search models",
    search_hint: "Type to filter, e.g. civic",
    model_list_heading: "Models",
    no_models: "No models match your search",
    loading_models: "Loading models...",
    loading_metrics: "Loading model statistics...",
    loading_scatter: "Loading prediction data...",
    form_heading: "Car details",
    year_label: "Year",
    miles_label: "Mileage",
    selected_model_label: "Model",
    no_model_selected: "Pick a model from the list",
    submit_button: "Predict price",
    predicting: "Predicting...",
    result_heading: "Estimated price",
    history_heading: "Recent predictions",
    history_empty: "No predictions yet",
    clear_history: "Clear",

    metrics_heading: "Error metrics",
    scatter_heading: "Actual vs predicted",
    price_distribution_heading: "Price distribution",
    year_distribution_heading: "Year distribution",
    accuracy_heading: "Accuracy by price range",
    refresh_button: "⟳ Refresh",
    scatter_x_axis: "Actual price",
    scatter_y_axis: "Predicted price",
    scatter_points_label: "Predictions",
    ideal_line_label: "Perfect prediction",
    count_axis: "Cars",
    mae_axis: "MAE",
    no_scatter_points: "No prediction samples to plot",

    cars_failed: "Failed to load car models",
    predict_failed: "Failed to connect to prediction service",
    stats_failed: "Failed to load model statistics",
    scatter_failed: "Failed to load prediction data",

    backend_label: "Backend",
    in_flight_label: "requests in flight",
};
