use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use notekeep_infra::StoreError;

/// Error body shared by every non-2xx response:
/// `{"error": {"message": "..."}}`.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        Json(json!({
            "error": { "message": message.into() },
        })),
    )
        .into_response()
}

/// Store failures are fatal to the request only: log the cause, answer
/// with an opaque 500.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!("store operation failed: {err}");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}
