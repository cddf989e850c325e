//! HTTP query proxy in front of the compute engine, plus a health probe.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod routes;
pub mod upstream;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use routes::{HealthReport, ProxyState, SERVICE_NAME};
pub use upstream::{ComputeEngine, EngineReply, EngineRequest, WolframEngine};

/// Builds the proxy router with permissive CORS and request tracing.
pub fn router(state: ProxyState) -> Router {
    routes::routes()
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
