use std::future::Future;

use eframe::egui;
use poll_promise::Promise;

use crate::api::{ApiClient, ApiError};
use crate::ui::app::CarPriceApp;
use crate::utils::app_time::now;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

pub type ApiPromise<T> = Promise<Result<T, ApiError>>;

/// Run a backend call off the UI thread (native: Tokio, browser: JS event loop).
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_request<T, F>(future: F) -> ApiPromise<T>
where
    T: Send + 'static,
    F: Future<Output = Result<T, ApiError>> + Send + 'static,
{
    Promise::spawn_async(future)
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_request<T, F>(future: F) -> ApiPromise<T>
where
    T: Send + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    Promise::spawn_local(future)
}

/// What a view should render for one backend resource.
pub enum RequestState<'a, T> {
    Idle,
    Loading,
    Failed(&'a ApiError),
    Loaded(&'a T),
}

/// One backend resource: at most one call in flight plus the last outcome.
///
/// Starting a call drops whatever was in flight, so a slow stale response can
/// never land on top of a newer one.
pub struct Request<T: Send + 'static> {
    promise: Option<ApiPromise<T>>,
    outcome: Option<Result<T, ApiError>>,
}

impl<T: Send + 'static> Default for Request<T> {
    fn default() -> Self {
        Self {
            promise: None,
            outcome: None,
        }
    }
}

impl<T: Send + 'static> Request<T> {
    pub fn start(&mut self, promise: ApiPromise<T>) {
        self.promise = Some(promise);
    }

    /// Pick up a finished call. Returns `true` on the frame the outcome lands.
    pub fn poll(&mut self) -> bool {
        let Some(promise) = self.promise.take() else {
            return false;
        };

        match promise.try_take() {
            Ok(result) => {
                self.outcome = Some(result);
                true
            }
            Err(pending) => {
                self.promise = Some(pending);
                false
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.promise.is_some()
    }

    pub fn has_started(&self) -> bool {
        self.promise.is_some() || self.outcome.is_some()
    }

    pub fn state(&self) -> RequestState<'_, T> {
        if self.is_loading() {
            return RequestState::Loading;
        }
        match &self.outcome {
            None => RequestState::Idle,
            Some(Ok(value)) => RequestState::Loaded(value),
            Some(Err(err)) => RequestState::Failed(err),
        }
    }

    /// Last successful value, even while a newer call is in flight.
    pub fn latest(&self) -> Option<&T> {
        self.outcome.as_ref().and_then(|outcome| outcome.as_ref().ok())
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.outcome.as_ref().and_then(|outcome| outcome.as_ref().err())
    }

    pub fn clear(&mut self) {
        self.promise = None;
        self.outcome = None;
    }
}

impl CarPriceApp {
    fn client(&self) -> Option<ApiClient> {
        if self.api.is_none() {
            log::warn!("No backend client configured, request skipped");
        }
        self.api.clone()
    }

    pub(super) fn request_cars(&mut self, search: Option<String>) {
        let Some(api) = self.client() else {
            return;
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_requests {
            log::info!("Requesting car models (search: {:?})", search);
        }

        self.cars
            .start(spawn_request(async move { api.cars(search).await }));
    }

    pub(super) fn submit_prediction(&mut self) {
        if self.prediction.is_loading() {
            return;
        }
        let Some(body) = self.form.to_request() else {
            return;
        };
        let Some(api) = self.client() else {
            return;
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!(
                "Submitting prediction for {} ({}, {} miles)",
                body.name,
                body.year,
                body.miles
            );
        }

        let sent = body.clone();
        self.prediction
            .start(spawn_request(async move { api.predict(&sent).await }));
        self.pending_prediction = Some(body);
    }

    pub(super) fn refresh_analytics(&mut self) {
        let Some(api) = self.client() else {
            return;
        };
        let scatter_api = api.clone();
        self.stats
            .start(spawn_request(async move { api.model_stats().await }));

        self.scatter
            .start(spawn_request(async move { scatter_api.prediction_scatter().await }));
    }

    pub(super) fn in_flight_count(&self) -> usize {
        [
            self.cars.is_loading(),
            self.prediction.is_loading(),
            self.stats.is_loading(),
            self.scatter.is_loading(),
        ]
        .into_iter()
        .filter(|&loading| loading)
        .count()
    }

    /// Called once per frame: land finished calls and fire the debounced search.
    pub(super) fn poll_requests(&mut self, ctx: &egui::Context) {
        if self.cars.poll() {
            if let Some(err) = self.cars.error() {
                log::error!("❌ Loading car models failed: {}", err);
            }
        }

        if self.prediction.poll() {
            self.on_prediction_finished();
        }

        if self.stats.poll() {
            if let Some(err) = self.stats.error() {
                log::error!("❌ Loading model statistics failed: {}", err);
            }
        }

        if self.scatter.poll() {
            match self.scatter.latest() {
                Some(scatter) => self.scatter_points = scatter.points(),
                None => {
                    self.scatter_points.clear();
                    if let Some(err) = self.scatter.error() {
                        log::error!("❌ Loading prediction scatter failed: {}", err);
                    }
                }
            }
        }

        let now = now();
        if self.search_debounce.fire(now) {
            let term = self.form.search.trim().to_string();
            self.request_cars((!term.is_empty()).then_some(term));
        } else if let Some(wait) = self.search_debounce.remaining(now) {
            ctx.request_repaint_after(wait);
        }

        if self.in_flight_count() > 0 {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> ApiError {
        ApiError::Status {
            endpoint: "/cars".to_string(),
            status: 503,
            message: None,
        }
    }

    #[test]
    fn fresh_request_is_idle() {
        let request: Request<u32> = Request::default();
        assert!(matches!(request.state(), RequestState::Idle));
        assert!(!request.has_started());
        assert!(request.latest().is_none());
    }

    #[test]
    fn pending_call_reports_loading_until_sent() {
        let mut request: Request<u32> = Request::default();
        let (sender, promise) = Promise::new();
        request.start(promise);

        assert!(!request.poll());
        assert!(matches!(request.state(), RequestState::Loading));

        sender.send(Ok(7));
        assert!(request.poll());
        assert!(matches!(request.state(), RequestState::Loaded(&7)));
        assert!(!request.poll());
    }

    #[test]
    fn failure_is_kept_as_outcome() {
        let mut request: Request<u32> = Request::default();
        request.start(Promise::from_ready(Err(failure())));

        assert!(request.poll());
        assert!(matches!(request.state(), RequestState::Failed(_)));
        assert!(request.error().is_some());
        assert!(request.latest().is_none());
    }

    #[test]
    fn restarting_drops_the_stale_call() {
        let mut request: Request<u32> = Request::default();
        let (stale_sender, stale) = Promise::new();
        request.start(stale);
        request.start(Promise::from_ready(Ok(2)));

        // The stale call finishing later must not matter
        stale_sender.send(Ok(1));

        assert!(request.poll());
        assert_eq!(request.latest(), Some(&2));
    }

    #[test]
    fn latest_survives_a_refresh() {
        let mut request: Request<u32> = Request::default();
        request.start(Promise::from_ready(Ok(5)));
        request.poll();

        let (_sender, pending) = Promise::new();
        request.start(pending);

        assert!(request.is_loading());
        assert_eq!(request.latest(), Some(&5));

        request.clear();
        assert!(!request.has_started());
    }
}
