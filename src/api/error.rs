use thiserror::Error;

/// Everything that can go wrong talking to the backend.
///
/// Views log these and show a static message, except for a message the
/// backend put in a `/predict` error body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Status {
        endpoint: String,
        status: u16,
        message: Option<String>,
    },

    #[error("could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Message the backend put in an error body, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_endpoint_and_details() {
        let err = ApiError::Status {
            endpoint: "/predict".to_string(),
            status: 422,
            message: Some("year out of range".to_string()),
        };
        assert_eq!(err.to_string(), "/predict returned HTTP 422: year out of range");
        assert_eq!(err.backend_message(), Some("year out of range"));
    }

    #[test]
    fn status_error_without_body() {
        let err = ApiError::Status {
            endpoint: "/cars".to_string(),
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "/cars returned HTTP 500: no details");
        assert_eq!(err.backend_message(), None);
    }

    #[test]
    fn decode_error_wraps_serde() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = ApiError::Decode {
            endpoint: "/model-stats".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("could not decode /model-stats response"));
    }
}
