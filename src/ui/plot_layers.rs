use std::collections::BTreeMap;

use colorgrad::Gradient;
use eframe::egui::Color32;
use egui_plot::{Line, LineStyle, MarkerShape, PlotPoints, PlotUi, Points};

use crate::config::plot::PLOT_CONFIG;
use crate::models::ScatterPoint;
use crate::ui::config::{UI_CONFIG, UI_TEXT};

/// Context passed to every layer during rendering.
/// This prevents argument explosion.
pub struct LayerContext<'a> {
    pub points: &'a [ScatterPoint],
    pub price_bounds: (f64, f64),
    pub year_bounds: (i32, i32),
    pub gradient: Option<&'a colorgrad::CatmullRomGradient>,
}

impl LayerContext<'_> {
    /// Color for a model year: oldest at the start of the gradient, newest at the end.
    pub fn year_color(&self, year: i32) -> Color32 {
        let Some(gradient) = self.gradient else {
            return UI_CONFIG.colors.accent;
        };
        let (oldest, newest) = self.year_bounds;
        let t = if newest > oldest {
            (year - oldest) as f32 / (newest - oldest) as f32
        } else {
            0.5
        };
        to_egui_color(gradient.at(t.clamp(0.0, 1.0)))
    }
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. IDEAL LINE (predicted == actual)
// ============================================================================
pub struct IdealLineLayer;

impl PlotLayer for IdealLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let (lo, hi) = ctx.price_bounds;
        let line = Line::new(UI_TEXT.ideal_line_label, PlotPoints::new(vec![[lo, lo], [hi, hi]]))
            .color(PLOT_CONFIG.ideal_line_color)
            .width(PLOT_CONFIG.ideal_line_width)
            .style(LineStyle::dashed_loose());
        plot_ui.line(line);
    }
}

// ============================================================================
// 2. PREDICTION POINTS (colored by model year)
// ============================================================================
pub struct PredictionPointsLayer;

impl PlotLayer for PredictionPointsLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        // One series per year so each gets its own color. They share a name,
        // which makes the legend show a single entry.
        let mut by_year: BTreeMap<i32, Vec<[f64; 2]>> = BTreeMap::new();
        for point in ctx.points {
            by_year
                .entry(point.year)
                .or_default()
                .push([point.actual, point.predicted]);
        }

        for (year, coords) in by_year {
            let points = Points::new(UI_TEXT.scatter_points_label, PlotPoints::new(coords))
                .color(ctx.year_color(year))
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(PLOT_CONFIG.scatter_point_radius);
            plot_ui.points(points);
        }
    }
}

/// Build the model-year gradient once; `None` if the configured colors are invalid.
pub fn year_gradient() -> Option<colorgrad::CatmullRomGradient> {
    colorgrad::GradientBuilder::new()
        .html_colors(PLOT_CONFIG.year_gradient_colors)
        .build::<colorgrad::CatmullRomGradient>()
        .map_err(|e| log::error!("Invalid year gradient colors: {}", e))
        .ok()
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_gradient_builds() {
        assert!(year_gradient().is_some());
    }

    #[test]
    fn year_colors_follow_gradient_ends() {
        let gradient = year_gradient().unwrap();
        let ctx = LayerContext {
            points: &[],
            price_bounds: (0.0, 1.0),
            year_bounds: (2000, 2020),
            gradient: Some(&gradient),
        };

        // Navy blue at the old end, warm at the new end
        let oldest = ctx.year_color(2000);
        let newest = ctx.year_color(2020);
        assert!(oldest.b() > oldest.r());
        assert!(newest.r() > newest.b());
        // Out-of-range years clamp to the ends
        assert_eq!(ctx.year_color(2030), newest);
        assert_eq!(ctx.year_color(1980), ctx.year_color(2000));
    }

    #[test]
    fn missing_gradient_falls_back_to_accent() {
        let ctx = LayerContext {
            points: &[],
            price_bounds: (0.0, 1.0),
            year_bounds: (2010, 2010),
            gradient: None,
        };
        assert_eq!(ctx.year_color(2010), UI_CONFIG.colors.accent);
    }
}
