use eframe::egui::{Button, DragValue, Grid, RichText, ScrollArea, TextEdit, Ui};

use crate::api::ApiError;
use crate::config::FORM;
use crate::models::{CarList, PredictionHistory};
use crate::ui::app::FormState;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{
    colored_subsection_heading, format_miles, format_price, section_heading, spaced_separator,
};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

// ============================================================================
// MODEL SEARCH + PICKER
// ============================================================================

#[derive(Debug, PartialEq)]
pub enum ModelPickerEvent {
    /// The search text changed; the caller restarts the debounce timer.
    SearchEdited,
    ModelSelected(String),
}

pub struct ModelPickerPanel<'a> {
    search: &'a mut String,
    selected_model: Option<&'a str>,
    cars: Option<&'a CarList>,
    loading: bool,
    error: Option<&'a ApiError>,
}

impl<'a> ModelPickerPanel<'a> {
    pub fn new(
        search: &'a mut String,
        selected_model: Option<&'a str>,
        cars: Option<&'a CarList>,
        loading: bool,
        error: Option<&'a ApiError>,
    ) -> Self {
        Self {
            search,
            selected_model,
            cars,
            loading,
            error,
        }
    }

    fn render_search_box(&mut self, ui: &mut Ui) -> bool {
        ui.label(colored_subsection_heading(UI_TEXT.search_heading));
        let response = ui.add(
            TextEdit::singleline(&mut *self.search)
                .hint_text(UI_TEXT.search_hint)
                .desired_width(f32::INFINITY),
        );
        response.changed()
    }

    fn render_model_list(&mut self, ui: &mut Ui) -> Option<String> {
        let mut picked = None;

        ui.horizontal(|ui| {
            ui.label(colored_subsection_heading(UI_TEXT.model_list_heading));
            if self.loading {
                ui.spinner();
            }
        });

        if self.error.is_some() {
            ui.label_error(UI_TEXT.cars_failed);
        }

        let Some(cars) = self.cars else {
            if self.loading {
                ui.label_subdued(UI_TEXT.loading_models);
            }
            return None;
        };

        if cars.is_empty() {
            ui.label_subdued(UI_TEXT.no_models);
            return None;
        }

        ScrollArea::vertical()
            .max_height(UI_CONFIG.model_list_height)
            .id_salt("model_list")
            .show(ui, |ui| {
                for car in &cars.cars {
                    let is_selected = self.selected_model == Some(car.as_str());
                    if ui.selectable_label(is_selected, car).clicked() && !is_selected {
                        picked = Some(car.clone());
                    }
                }
            });

        ui.label_subdued(format!("Showing {} of {} models", cars.shown(), cars.total));
        picked
    }
}

impl<'a> Panel for ModelPickerPanel<'a> {
    type Event = ModelPickerEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        if self.render_search_box(ui) {
            events.push(ModelPickerEvent::SearchEdited);
        }
        ui.add_space(8.0);

        if let Some(model) = self.render_model_list(ui) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("A new model was selected: {}", model);
            }
            events.push(ModelPickerEvent::ModelSelected(model));
        }
        events
    }
}

// ============================================================================
// CAR DETAILS FORM
// ============================================================================

#[derive(Debug, PartialEq)]
pub enum FormEvent {
    Submit,
}

pub struct PredictionFormPanel<'a> {
    form: &'a mut FormState,
    latest_year: i32,
    in_flight: bool,
}

impl<'a> PredictionFormPanel<'a> {
    pub fn new(form: &'a mut FormState, latest_year: i32, in_flight: bool) -> Self {
        Self {
            form,
            latest_year,
            in_flight,
        }
    }
}

impl<'a> Panel for PredictionFormPanel<'a> {
    type Event = FormEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.form_heading);

        Grid::new("prediction_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(UI_TEXT.selected_model_label);
                match self.form.selected_model.as_deref() {
                    Some(model) => {
                        ui.label(RichText::new(model).strong().color(UI_CONFIG.colors.accent));
                    }
                    None => ui.label_subdued(UI_TEXT.no_model_selected),
                }
                ui.end_row();

                ui.label(UI_TEXT.year_label);
                ui.add(
                    DragValue::new(&mut self.form.year)
                        .range(FORM.min_year..=self.latest_year)
                        .speed(0.1),
                );
                ui.end_row();

                ui.label(UI_TEXT.miles_label);
                ui.add(
                    DragValue::new(&mut self.form.miles)
                        .range(0.0..=FORM.max_miles)
                        .speed(100.0)
                        .max_decimals(0)
                        .suffix(" mi"),
                );
                ui.end_row();
            });

        ui.add_space(10.0);

        let can_submit = self.form.to_request().is_some() && !self.in_flight;
        let label = if self.in_flight {
            UI_TEXT.predicting
        } else {
            UI_TEXT.submit_button
        };
        if ui
            .add_enabled(can_submit, Button::new(RichText::new(label).strong()))
            .clicked()
        {
            events.push(FormEvent::Submit);
        }
        events
    }
}

// ============================================================================
// HISTORY
// ============================================================================

#[derive(Debug, PartialEq)]
pub enum HistoryEvent {
    Clear,
}

pub struct HistoryPanel<'a> {
    history: &'a PredictionHistory,
}

impl<'a> HistoryPanel<'a> {
    pub fn new(history: &'a PredictionHistory) -> Self {
        Self { history }
    }
}

impl<'a> Panel for HistoryPanel<'a> {
    type Event = HistoryEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.horizontal(|ui| {
            ui.label_header(UI_TEXT.history_heading);
            if !self.history.is_empty() && ui.small_button(UI_TEXT.clear_history).clicked() {
                events.push(HistoryEvent::Clear);
            }
        });
        spaced_separator(ui);

        if self.history.is_empty() {
            ui.label_subdued(UI_TEXT.history_empty);
            return events;
        }

        Grid::new("prediction_history")
            .num_columns(4)
            .striped(true)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                for record in self.history.iter() {
                    ui.label_subdued(&record.made_at);
                    ui.label(format!("{} ({})", record.name, record.year));
                    ui.label_subdued(format_miles(record.miles));
                    ui.label(
                        RichText::new(format_price(record.predicted_price))
                            .strong()
                            .color(UI_CONFIG.colors.price),
                    );
                    ui.end_row();
                }
            });
        events
    }
}
