use eframe::egui::{Frame, RichText, Ui};

use crate::ui::app::PredictionDisplay;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{
    FormEvent, HistoryEvent, HistoryPanel, ModelPickerEvent, ModelPickerPanel, Panel,
    PredictionFormPanel,
};
use crate::ui::utils::{format_miles, format_price, section_heading, spaced_separator};
use crate::utils::app_time::now;

use super::app::CarPriceApp;

impl CarPriceApp {
    pub(super) fn render_predict_page(&mut self, ui: &mut Ui) {
        let mut picker_events = Vec::new();
        let mut form_events = Vec::new();

        ui.columns(2, |cols| {
            picker_events = ModelPickerPanel::new(
                &mut self.form.search,
                self.form.selected_model.as_deref(),
                self.cars.latest(),
                self.cars.is_loading(),
                self.cars.error(),
            )
            .render(&mut cols[0]);

            form_events = PredictionFormPanel::new(
                &mut self.form,
                self.latest_year,
                self.prediction.is_loading(),
            )
            .render(&mut cols[1]);

            cols[1].add_space(12.0);
            render_result_card(&mut cols[1], self.last_prediction.as_ref(), self.prediction.is_loading());
        });

        for event in picker_events {
            match event {
                ModelPickerEvent::SearchEdited => self.search_debounce.touch(now()),
                ModelPickerEvent::ModelSelected(model) => self.form.selected_model = Some(model),
            }
        }

        for event in form_events {
            match event {
                FormEvent::Submit => self.submit_prediction(),
            }
        }

        spaced_separator(ui);

        let history_events = HistoryPanel::new(&self.history).render(ui);
        for event in history_events {
            match event {
                HistoryEvent::Clear => self.history.clear(),
            }
        }
    }
}

fn render_result_card(ui: &mut Ui, display: Option<&PredictionDisplay>, in_flight: bool) {
    if in_flight {
        ui.loading(UI_TEXT.predicting);
        return;
    }

    let Some(display) = display else {
        return;
    };

    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        match display {
            PredictionDisplay::Price(record) => {
                section_heading(ui, UI_TEXT.result_heading);
                ui.label(
                    RichText::new(format_price(record.predicted_price))
                        .size(32.0)
                        .strong()
                        .color(UI_CONFIG.colors.price),
                );
                ui.label_subdued(format!(
                    "{} · {} · {}",
                    record.name,
                    record.year,
                    format_miles(record.miles)
                ));
            }
            PredictionDisplay::Failed(message) => {
                ui.label_error(format!("⚠ {}", message));
            }
        }
    });
}
