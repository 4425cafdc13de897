//! Chart visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Gradient used to color scatter points by model year (oldest to newest)
    pub year_gradient_colors: &'static [&'static str],
    /// Reference line where predicted == actual
    pub ideal_line_color: Color32,
    pub ideal_line_width: f32,
    pub scatter_point_radius: f32,
    pub price_distribution_color: Color32,
    pub year_distribution_color: Color32,
    pub accuracy_bar_color: Color32,
    /// Bar width as a fraction of the category slot
    pub bar_width: f64,
    pub scatter_height: f32,
    pub bar_chart_height: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    year_gradient_colors: &[
        "#000080", // Navy blue
        "#4b0082", // Indigo
        "#ffb703", // Amber
        "#ff8c00", // Dark orange
        "#ff4500", // Orange red
    ],
    ideal_line_color: Color32::from_rgb(255, 215, 0), // Gold
    ideal_line_width: 2.0,
    scatter_point_radius: 2.5,
    price_distribution_color: Color32::from_rgb(0, 191, 255), // Deep sky blue
    year_distribution_color: Color32::from_rgb(130, 200, 140),
    accuracy_bar_color: Color32::from_rgb(255, 145, 164), // Salmon pink
    bar_width: 0.7,
    scatter_height: 360.0,
    bar_chart_height: 240.0,
};
