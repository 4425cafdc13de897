use eframe::egui::{Button, Ui};

use crate::config::plot::PLOT_CONFIG;
use crate::models::ModelStats;
use crate::ui::app_async::RequestState;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_plot_view::{show_accuracy_chart, show_distribution_chart, show_scatter_plot};
use crate::ui::utils::{colored_subsection_heading, format_number, format_price, spaced_separator};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

use super::app::CarPriceApp;

impl CarPriceApp {
    pub(super) fn render_analytics_page(&mut self, ui: &mut Ui) {
        let busy = self.stats.is_loading() || self.scatter.is_loading();

        ui.horizontal(|ui| {
            ui.label_header(UI_TEXT.nav_analytics);
            ui.add_space(16.0);
            if ui
                .add_enabled(!busy, Button::new(UI_TEXT.refresh_button))
                .clicked()
            {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!("Refreshing analytics");
                }
                self.refresh_analytics();
            }
        });
        spaced_separator(ui);

        // --- SECTION 1: ERROR METRICS ---
        ui.label(colored_subsection_heading(UI_TEXT.metrics_heading));
        ui.add_space(6.0);
        match self.stats.state() {
            RequestState::Idle => {}
            RequestState::Loading => ui.loading(UI_TEXT.loading_metrics),
            RequestState::Failed(_) => ui.label_error(UI_TEXT.stats_failed),
            RequestState::Loaded(stats) => render_metric_cards(ui, stats),
        }
        spaced_separator(ui);

        // --- SECTION 2: ACTUAL VS PREDICTED ---
        ui.label(colored_subsection_heading(UI_TEXT.scatter_heading));
        ui.add_space(6.0);
        match self.scatter.state() {
            RequestState::Idle => {}
            RequestState::Loading => ui.loading(UI_TEXT.loading_scatter),
            RequestState::Failed(_) => ui.label_error(UI_TEXT.scatter_failed),
            RequestState::Loaded(_) if self.scatter_points.is_empty() => {
                ui.label_subdued(UI_TEXT.no_scatter_points)
            }
            RequestState::Loaded(_) => {
                ui.label_subdued(format!("{} samples", format_number(self.scatter_points.len() as f64, 0)));
                show_scatter_plot(ui, &self.scatter_points);
            }
        }

        // --- SECTION 3: DISTRIBUTIONS (part of /model-stats) ---
        let RequestState::Loaded(stats) = self.stats.state() else {
            return;
        };
        render_distribution_sections(ui, stats);
    }
}

fn render_metric_cards(ui: &mut Ui, stats: &ModelStats) {
    let metrics = &stats.metrics;
    ui.horizontal_wrapped(|ui| {
        ui.metric_card("MSE", &format_number(metrics.mse, 0), UI_CONFIG.colors.accent);
        ui.metric_card("RMSE", &format_price(metrics.rmse), UI_CONFIG.colors.accent);
        ui.metric_card("MAE", &format_price(metrics.mae), UI_CONFIG.colors.accent);
        ui.metric_card("R²", &format!("{:.3}", metrics.r2), UI_CONFIG.colors.price);
    });
    if let Some(samples) = stats.sample_count {
        ui.label_subdued(format!("Evaluated on {} cars", format_number(samples as f64, 0)));
    }
}

fn render_distribution_sections(ui: &mut Ui, stats: &ModelStats) {
    if !stats.price_distribution.is_empty() {
        spaced_separator(ui);
        ui.label(colored_subsection_heading(UI_TEXT.price_distribution_heading));
        show_distribution_chart(
            ui,
            "price_distribution",
            &stats.price_distribution,
            PLOT_CONFIG.price_distribution_color,
        );
    }

    if stats.has_year_distribution() {
        spaced_separator(ui);
        ui.label(colored_subsection_heading(UI_TEXT.year_distribution_heading));
        show_distribution_chart(
            ui,
            "year_distribution",
            &stats.year_distribution,
            PLOT_CONFIG.year_distribution_color,
        );
    }

    if !stats.accuracy_by_range.is_empty() {
        spaced_separator(ui);
        ui.label(colored_subsection_heading(UI_TEXT.accuracy_heading));
        show_accuracy_chart(ui, &stats.accuracy_by_range);
    }
}
