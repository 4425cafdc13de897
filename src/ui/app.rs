use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::api::{ApiClient, ApiError};
use crate::config::{API, FORM};
use crate::models::{
    CarList, ModelStats, PredictionHistory, PredictionOutcome, PredictionRecord,
    PredictionRequest, PredictionResponse, PredictionScatter, ScatterPoint,
};
use crate::ui::app_async::{Request, RequestState};
use crate::ui::config::UI_TEXT;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::Debouncer;
use crate::utils::app_time::{clock_label, latest_model_year};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Top-level pages reachable from the navigation bar.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
)]
pub enum Page {
    #[default]
    Predict,
    Analytics,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Predict => UI_TEXT.nav_predict,
            Page::Analytics => UI_TEXT.nav_analytics,
        }
    }
}

/// Runtime settings chosen at startup (CLI or defaults).
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub api_base_url: String,
    pub timeout: Duration,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: API.default_base_url.to_string(),
            timeout: Duration::from_secs(API.default_timeout_secs),
        }
    }
}

/// The inputs of the prediction form. Persisted between sessions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    // Not persisted: the first model list is always unfiltered
    #[serde(skip)]
    pub search: String,
    pub selected_model: Option<String>,
    pub year: i32,
    pub miles: f64,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            search: String::new(),
            selected_model: None,
            year: FORM.default_year,
            miles: FORM.default_miles,
        }
    }
}

impl FormState {
    /// Builds the request body, or `None` while no model is picked.
    pub fn to_request(&self) -> Option<PredictionRequest> {
        let name = self.selected_model.as_deref()?.trim();
        if name.is_empty() {
            return None;
        }
        Some(PredictionRequest {
            name: name.to_string(),
            year: self.year,
            miles: self.miles,
        })
    }

    /// Pull out-of-range values (e.g. from an older persisted state) back into bounds.
    pub fn clamp_to_limits(&mut self, latest_year: i32) {
        self.year = self.year.clamp(FORM.min_year, latest_year);
        self.miles = if self.miles.is_finite() {
            self.miles.clamp(0.0, FORM.max_miles)
        } else {
            FORM.default_miles
        };
    }
}

/// What the result card shows after the last submit.
#[derive(Clone, Debug, PartialEq)]
pub enum PredictionDisplay {
    Price(PredictionRecord),
    Failed(String),
}

/// Turn a finished `/predict` call into what the result card should show.
pub fn prediction_display(
    request: &PredictionRequest,
    outcome: Result<&PredictionResponse, &ApiError>,
    made_at: String,
) -> PredictionDisplay {
    match outcome {
        Ok(response) => match response.outcome() {
            PredictionOutcome::Price(price) => {
                PredictionDisplay::Price(PredictionRecord::new(request, price, made_at))
            }
            PredictionOutcome::Rejected(message) => PredictionDisplay::Failed(
                message.unwrap_or_else(|| UI_TEXT.predict_failed.to_string()),
            ),
        },
        // A non-2xx reply can still explain itself in its `error` field
        Err(err) => PredictionDisplay::Failed(
            err.backend_message()
                .map(str::trim)
                .filter(|msg| !msg.is_empty())
                .unwrap_or(UI_TEXT.predict_failed)
                .to_string(),
        ),
    }
}

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct CarPriceApp {
    // UI state
    pub(super) page: Page,
    pub(super) form: FormState,
    pub(super) history: PredictionHistory,

    // Runtime-only state: skipped during serialization
    // Built once in `new`; `None` only for a bare default
    #[serde(skip)]
    pub(super) api: Option<ApiClient>,
    #[serde(skip)]
    pub(super) latest_year: i32,

    // Prediction page
    #[serde(skip)]
    pub(super) cars: Request<CarList>,
    #[serde(skip)]
    pub(super) search_debounce: Debouncer,
    #[serde(skip)]
    pub(super) prediction: Request<PredictionResponse>,
    #[serde(skip)]
    pub(super) pending_prediction: Option<PredictionRequest>,
    #[serde(skip)]
    pub(super) last_prediction: Option<PredictionDisplay>,

    // Analytics page
    #[serde(skip)]
    pub(super) stats: Request<ModelStats>,
    #[serde(skip)]
    pub(super) scatter: Request<PredictionScatter>,
    // Zipped once per response rather than every frame
    #[serde(skip)]
    pub(super) scatter_points: Vec<ScatterPoint>,
}

impl Default for CarPriceApp {
    fn default() -> Self {
        Self {
            page: Page::default(),
            form: FormState::default(),
            history: PredictionHistory::default(),
            api: None,
            latest_year: latest_model_year(),
            cars: Request::default(),
            search_debounce: Debouncer::default(),
            prediction: Request::default(),
            pending_prediction: None,
            last_prediction: None,
            stats: Request::default(),
            scatter: Request::default(),
            scatter_points: Vec::new(),
        }
    }
}

impl CarPriceApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Result<Self, ApiError> {
        // Attempt to load the persisted state
        let mut app: CarPriceApp = match cc.storage.and_then(|s| eframe::get_value(s, eframe::APP_KEY)) {
            Some(value) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Successfully loaded persisted state");
                }
                value
            }
            None => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("No persisted state found. Creating anew.");
                }
                CarPriceApp::default()
            }
        };

        let api = ApiClient::new(settings.api_base_url, settings.timeout)?;
        log::info!("Using prediction backend at {}", api.base_url());
        app.api = Some(api);
        app.latest_year = latest_model_year();
        app.form.clamp_to_limits(app.latest_year);

        Ok(app)
    }

    pub(super) fn set_page(&mut self, page: Page) {
        if self.page == page {
            return;
        }
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Switched to page {:?}", page);
        }
        self.page = page;
    }

    /// Kick off the first load for whichever page is showing.
    fn ensure_page_loaded(&mut self) {
        match self.page {
            Page::Predict => {
                if !self.cars.has_started() {
                    self.request_cars(None);
                }
            }
            Page::Analytics => {
                if !self.stats.has_started() || !self.scatter.has_started() {
                    self.refresh_analytics();
                }
            }
        }
    }

    pub(super) fn on_prediction_finished(&mut self) {
        let Some(request) = self.pending_prediction.take() else {
            return;
        };

        let outcome = match self.prediction.state() {
            RequestState::Loaded(response) => Ok(response),
            RequestState::Failed(err) => {
                log::error!("❌ Prediction failed: {}", err);
                Err(err)
            }
            _ => return,
        };

        let display = prediction_display(&request, outcome, clock_label());
        match &display {
            PredictionDisplay::Price(record) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!("✅ {} predicted at {:.2}", record.name, record.predicted_price);
                }
                self.history.push(record.clone());
            }
            PredictionDisplay::Failed(message) => {
                log::warn!("Prediction rejected: {}", message);
            }
        }
        self.last_prediction = Some(display);
    }
}

impl eframe::App for CarPriceApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop in-flight calls so their senders see a closed channel, not a dead UI
        self.cars.clear();
        self.prediction.clear();
        self.stats.clear();
        self.scatter.clear();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.ensure_page_loaded();
        self.poll_requests(ctx);

        self.render_top_bar(ctx);
        self.render_status_bar(ctx);
        self.render_central_panel(ctx);
    }
}
