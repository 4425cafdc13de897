use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::config::API;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::models::{CarList, ModelStats, PredictionRequest, PredictionResponse, PredictionScatter};

/// Error bodies the backend sends alongside non-2xx statuses.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Thin typed wrapper over the four backend routes.
///
/// Cheap to clone: `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let builder = Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(timeout);
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let http = builder.build().map_err(ApiError::Client)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // --- REQUEST BUILDERS ---

    pub fn cars_request(&self, search: Option<&str>) -> RequestBuilder {
        let request = self.http.get(self.url(API.endpoints.cars));
        match search.map(str::trim).filter(|term| !term.is_empty()) {
            Some(term) => request.query(&[(API.search_param, term)]),
            None => request,
        }
    }

    pub fn predict_request(&self, body: &PredictionRequest) -> RequestBuilder {
        self.http.post(self.url(API.endpoints.predict)).json(body)
    }

    pub fn model_stats_request(&self) -> RequestBuilder {
        self.http.get(self.url(API.endpoints.model_stats))
    }

    pub fn prediction_scatter_request(&self) -> RequestBuilder {
        self.http.get(self.url(API.endpoints.prediction_scatter))
    }

    // --- CALLS ---

    pub async fn cars(&self, search: Option<String>) -> Result<CarList, ApiError> {
        self.send_json(API.endpoints.cars, self.cars_request(search.as_deref()))
            .await
    }

    pub async fn predict(&self, body: &PredictionRequest) -> Result<PredictionResponse, ApiError> {
        self.send_json(API.endpoints.predict, self.predict_request(body))
            .await
    }

    pub async fn model_stats(&self) -> Result<ModelStats, ApiError> {
        self.send_json(API.endpoints.model_stats, self.model_stats_request())
            .await
    }

    pub async fn prediction_scatter(&self) -> Result<PredictionScatter, ApiError> {
        self.send_json(
            API.endpoints.prediction_scatter,
            self.prediction_scatter_request(),
        )
        .await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_requests {
            log::info!("→ {}{}", self.base_url, endpoint);
        }

        let transport = |source| ApiError::Transport {
            endpoint: endpoint.to_string(),
            source,
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport)?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_requests {
            log::info!("← {} {} ({} bytes)", endpoint, status.as_u16(), body.len());
        }

        decode_body(endpoint, status.as_u16(), &body)
    }
}

/// Turn a raw status + body into a typed value or an `ApiError`.
fn decode_body<T: DeserializeOwned>(endpoint: &str, status: u16, body: &[u8]) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error);
        return Err(ApiError::Status {
            endpoint: endpoint.to_string(),
            status,
            message,
        });
    }

    serde_json::from_slice(body).map_err(|source| ApiError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:5000/", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        assert_eq!(client().base_url(), "http://localhost:5000");
    }

    #[test]
    fn blank_search_sends_no_query() {
        let request = client().cars_request(Some("   ")).build().unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:5000/cars");

        let request = client().cars_request(None).build().unwrap();
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn search_term_is_trimmed_and_encoded() {
        let request = client().cars_request(Some(" civic type r ")).build().unwrap();
        assert_eq!(request.url().path(), "/cars");
        assert_eq!(request.url().query(), Some("search=civic+type+r"));
    }

    #[test]
    fn predict_posts_json_body() {
        let body = PredictionRequest {
            name: "Mazda 3".to_string(),
            year: 2017,
            miles: 81000.0,
        };
        let request = client().predict_request(&body).build().unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(request.url().path(), "/predict");
        assert_eq!(
            request.headers()[reqwest::header::CONTENT_TYPE],
            "application/json"
        );

        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        let sent: PredictionRequest = serde_json::from_slice(bytes).unwrap();
        assert_eq!(sent, body);
    }

    #[test]
    fn stats_routes() {
        let c = client();
        assert_eq!(
            c.model_stats_request().build().unwrap().url().path(),
            "/model-stats"
        );
        assert_eq!(
            c.prediction_scatter_request().build().unwrap().url().path(),
            "/prediction-scatter"
        );
    }

    #[test]
    fn decode_success_body() {
        let list: CarList = decode_body("/cars", 200, br#"{"cars": ["Kia Rio"], "total": 1}"#).unwrap();
        assert_eq!(list.cars, ["Kia Rio"]);
    }

    #[test]
    fn non_success_status_keeps_backend_message() {
        let err = decode_body::<PredictionResponse>(
            "/predict",
            400,
            br#"{"success": false, "error": "Missing field: miles"}"#,
        )
        .unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 400, .. }));
        assert_eq!(err.backend_message(), Some("Missing field: miles"));
    }

    #[test]
    fn non_json_error_page_has_no_message() {
        let err = decode_body::<ModelStats>("/model-stats", 502, b"<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.backend_message(), None);
    }

    #[test]
    fn malformed_success_body_is_decode_error() {
        let err = decode_body::<CarList>("/cars", 200, b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }
}
