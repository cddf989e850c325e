use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW, CACHE_CONTROL};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::SecondsFormat;
use proof_core::Clock;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::upstream::{ComputeEngine, EngineReply, EngineRequest};

pub const SERVICE_NAME: &str = "proofmaster-api";

const CACHE_POLICY: &str = "s-maxage=300, stale-while-revalidate";

#[derive(Clone)]
pub struct ProxyState {
    pub config: Arc<ProxyConfig>,
    pub engine: Arc<dyn ComputeEngine>,
    pub clock: Clock,
}

impl ProxyState {
    pub fn new(config: ProxyConfig, engine: Arc<dyn ComputeEngine>) -> Self {
        Self {
            config: Arc::new(config),
            engine,
            clock: Clock::default(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

#[derive(Debug, Deserialize)]
pub struct QueryParams {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub ok: bool,
    pub service: &'static str,
    pub timestamp: String,
    pub has_app_id: bool,
}

pub fn routes() -> Router<ProxyState> {
    Router::new()
        .route("/api/query", get(query).fallback(query_method_not_allowed))
        .route("/api/wolfram", get(query).fallback(query_method_not_allowed))
        .route("/api/health", get(health).fallback(health_method_not_allowed))
}

async fn query(
    State(state): State<ProxyState>,
    params: Option<Query<QueryParams>>,
) -> Result<Response, ProxyError> {
    // A query string that does not deserialize (e.g. `q` given twice) counts as missing.
    let raw = params.and_then(|Query(p)| p.q).unwrap_or_default();
    let input = raw.trim();
    if input.is_empty() {
        return Err(ProxyError::MissingQuery);
    }
    let app_id = state.config.app_id.clone().ok_or(ProxyError::MissingAppId)?;

    let request = EngineRequest {
        app_id,
        input: input.to_string(),
        units: state.config.units.clone(),
    };
    match state.engine.ask(&request).await? {
        EngineReply::Answer(text) => Ok((
            [(CACHE_CONTROL, CACHE_POLICY), (ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
            Json(json!({ "result": text })),
        )
            .into_response()),
        EngineReply::NoResult { status } => {
            debug!(status, query = %input, "compute engine had no result");
            Ok(Json(json!({
                "result": null,
                "error": format!("no result for: {raw}"),
            }))
            .into_response())
        }
    }
}

async fn query_method_not_allowed() -> ProxyError {
    ProxyError::MethodNotAllowed
}

async fn health(State(state): State<ProxyState>) -> Json<HealthReport> {
    Json(HealthReport {
        ok: true,
        service: SERVICE_NAME,
        timestamp: state.clock.now().to_rfc3339_opts(SecondsFormat::Millis, true),
        has_app_id: state.config.has_app_id(),
    })
}

async fn health_method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(ALLOW, "GET")],
        Json(json!({ "ok": false, "error": "Method not allowed" })),
    )
        .into_response()
}
