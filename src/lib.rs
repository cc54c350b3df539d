use axum::{extract::OriginalUri, response::IntoResponse, Json};
use http::StatusCode;
use serde_json::json;
use tracing::instrument;

pub mod config;
pub mod cors;
pub mod helper;
pub mod relay;
pub mod routes;

#[instrument]
pub async fn not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    tracing::info!("Unmatched uri: {}", uri);

    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not found",
            "message": format!("Path {} does not exist", uri.path()),
        })),
    )
}
