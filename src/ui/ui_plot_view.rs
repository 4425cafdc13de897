use eframe::egui::{self, Color32};
use egui_plot::{AxisHints, Bar, BarChart, Corner, GridMark, HPlacement, Legend, Plot};

use crate::config::plot::PLOT_CONFIG;
use crate::models::{DistributionBucket, RangeAccuracy, ScatterPoint};
use crate::ui::config::UI_TEXT;
use crate::ui::utils::{format_miles, format_number, format_price, format_price_whole};

use crate::ui::plot_layers::{
    IdealLineLayer, LayerContext, PlotLayer, PredictionPointsLayer, year_gradient,
};

/// Actual-vs-predicted chart plus the `y = x` reference line.
pub fn show_scatter_plot(ui: &mut egui::Ui, points: &[ScatterPoint]) {
    let (Some(price_bounds), Some(year_bounds)) = (
        ScatterPoint::price_bounds(points),
        ScatterPoint::year_bounds(points),
    ) else {
        return;
    };
    let gradient = year_gradient();

    Plot::new("prediction_scatter")
        .height(PLOT_CONFIG.scatter_height)
        .legend(Legend::default().position(Corner::LeftTop))
        .data_aspect(1.0)
        .custom_x_axes(vec![price_axis_x(UI_TEXT.scatter_x_axis)])
        .custom_y_axes(vec![price_axis_y(UI_TEXT.scatter_y_axis)])
        .label_formatter(|name, value| {
            if name != UI_TEXT.scatter_points_label {
                return String::new();
            }
            ScatterPoint::nearest(points, value.x, value.y)
                .map(scatter_hover_text)
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            let ctx = LayerContext {
                points,
                price_bounds,
                year_bounds,
                gradient: gradient.as_ref(),
            };

            // Back to front
            let layers: Vec<Box<dyn PlotLayer>> =
                vec![Box::new(IdealLineLayer), Box::new(PredictionPointsLayer)];
            for layer in layers {
                layer.render(plot_ui, &ctx);
            }
        });
}

fn scatter_hover_text(point: &ScatterPoint) -> String {
    format!(
        "Actual: {}\nPredicted: {}\nYear: {}\nMileage: {}",
        format_price(point.actual),
        format_price(point.predicted),
        point.year,
        format_miles(point.miles)
    )
}

/// Histogram over labelled buckets (price bands, model years).
pub fn show_distribution_chart(
    ui: &mut egui::Ui,
    id: &str,
    buckets: &[DistributionBucket],
    color: Color32,
) {
    let bars: Vec<Bar> = buckets
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            Bar::new(i as f64, bucket.count as f64)
                .name(&bucket.range)
                .fill(color)
                .width(PLOT_CONFIG.bar_width)
        })
        .collect();

    let labels = buckets.iter().map(|b| b.range.clone()).collect();
    show_bar_chart(ui, id, bars, labels, count_axis());
}

/// MAE per price band.
pub fn show_accuracy_chart(ui: &mut egui::Ui, ranges: &[RangeAccuracy]) {
    let bars: Vec<Bar> = ranges
        .iter()
        .enumerate()
        .map(|(i, range)| {
            let name = match range.mape {
                Some(mape) => format!("{} ({} cars, {:.1}% MAPE)", range.range, range.count, mape),
                None => format!("{} ({} cars)", range.range, range.count),
            };
            Bar::new(i as f64, range.mae)
                .name(name)
                .fill(PLOT_CONFIG.accuracy_bar_color)
                .width(PLOT_CONFIG.bar_width)
        })
        .collect();

    let labels = ranges.iter().map(|r| r.range.clone()).collect();
    show_bar_chart(ui, "accuracy_by_range", bars, labels, price_axis_y(UI_TEXT.mae_axis));
}

fn show_bar_chart(
    ui: &mut egui::Ui,
    id: &str,
    bars: Vec<Bar>,
    labels: Vec<String>,
    y_axis: AxisHints<'static>,
) {
    let category_count = labels.len();

    Plot::new(id)
        .height(PLOT_CONFIG.bar_chart_height)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .custom_x_axes(vec![category_axis(labels)])
        .custom_y_axes(vec![y_axis])
        // One mark per category, nothing in between
        .x_grid_spacer(move |input| {
            let (min, max) = input.bounds;
            let start = min.ceil().max(0.0) as usize;
            let end = (max.floor().max(0.0) as usize).min(category_count.saturating_sub(1));
            (start..=end)
                .map(|i| GridMark {
                    value: i as f64,
                    step_size: 1.0,
                })
                .collect()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(id, bars));
        });
}

/// X axis that prints the bucket label under each integer position.
fn category_axis(labels: Vec<String>) -> AxisHints<'static> {
    AxisHints::new_x().formatter(move |grid_mark, _range| {
        let value = grid_mark.value;
        let index = value.round();
        if (value - index).abs() > 1e-6 || index < 0.0 {
            return String::new();
        }
        labels.get(index as usize).cloned().unwrap_or_default()
    })
}

fn count_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.count_axis)
        .formatter(|grid_mark, _range| format_number(grid_mark.value, 0))
        .placement(HPlacement::Left)
}

fn price_axis_x(label: &str) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(label)
        .formatter(|grid_mark, _range| format_price_whole(grid_mark.value))
}

fn price_axis_y(label: &str) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(label)
        .formatter(|grid_mark, _range| format_price_whole(grid_mark.value))
        .placement(HPlacement::Left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_text_lists_year_and_miles() {
        let text = scatter_hover_text(&ScatterPoint {
            actual: 15000.0,
            predicted: 14200.5,
            year: 2017,
            miles: 48000.0,
        });
        assert_eq!(
            text,
            "Actual: $15,000.00\nPredicted: $14,200.50\nYear: 2017\nMileage: 48,000 mi"
        );
    }
}
