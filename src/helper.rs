use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde_json::json;

/// Wrapper for unexpected internal errors. The detail is logged server-side
/// and the caller only ever sees a generic 500 body.
pub struct RelayError(anyhow::Error);

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        tracing::error!("internal error: {:#}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error",
                "message": "An unexpected error occurred",
            })),
        )
            .into_response()
    }
}

impl<E> From<E> for RelayError
where
    E: Into<anyhow::Error>,
{
    fn from(value: E) -> Self {
        Self(value.into())
    }
}
