use axum::Json;
use axum::http::StatusCode;
use axum::http::header::ALLOW;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProxyError {
    #[error("Missing query parameter")]
    MissingQuery,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("WOLFRAM_APP_ID not configured")]
    MissingAppId,

    /// Carries no URL: the upstream query string holds the app id.
    #[error("Proxy error: {0}")]
    Upstream(#[source] reqwest::Error),

    /// Failure reported by a non-HTTP engine.
    #[error("Proxy error: {0}")]
    Engine(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(err.without_url())
    }
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingQuery => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingAppId | Self::Upstream(_) | Self::Engine(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self, "query proxy failed");
        }
        let body = Json(json!({ "error": self.to_string() }));
        match self {
            Self::MethodNotAllowed => (status, [(ALLOW, "GET")], body).into_response(),
            _ => (status, body).into_response(),
        }
    }
}
