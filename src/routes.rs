use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use http::{header, HeaderMap, Method};
use serde_json::Value;
use tracing::instrument;

use crate::{
    config::RelayConfig,
    helper::RelayError,
    not_found,
    relay::{self, ConfigPayload, HealthPayload, RelayRequest, RelayResponse},
};

impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        (self.status, self.headers, self.body).into_response()
    }
}

fn request_origin(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

#[instrument(skip(config, headers))]
async fn redirect_handler(
    State(config): State<Arc<RelayConfig>>,
    method: Method,
    headers: HeaderMap,
) -> Result<RelayResponse, RelayError> {
    let origin = request_origin(&headers);

    tracing::info!(
        "{} /api/redirect - Origin: {}",
        method,
        origin.as_deref().unwrap_or("N/A")
    );

    Ok(relay::redirect_response(
        &config,
        &RelayRequest { method, origin },
    )?)
}

async fn health_handler(
    State(config): State<Arc<RelayConfig>>,
) -> Result<Json<Value>, RelayError> {
    Ok(Json(serde_json::to_value(HealthPayload::new(&config))?))
}

async fn config_handler(
    State(config): State<Arc<RelayConfig>>,
) -> Result<Json<Value>, RelayError> {
    Ok(Json(serde_json::to_value(ConfigPayload::new(&config))?))
}

/// The server front-end. `/api/redirect` is registered for every method so
/// that the shared decision procedure keeps its ordering (origin gate before
/// method dispatch, 405 for the leftovers) instead of the router answering
/// for it.
pub fn relay_router(config: Arc<RelayConfig>) -> Router {
    Router::new()
        .route("/api/redirect", any(redirect_handler))
        .route("/health", get(health_handler))
        .route("/api/config", get(config_handler))
        .fallback(not_found)
        .with_state(config)
}
