//! The `/api/extract` endpoint and its error mapping.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use appsketch_provider::{ExtractError, Extractor};

/// Shared application state: one pipeline instance for all requests.
pub type AppState = Arc<Extractor>;

/// Request bodies larger than this are rejected outright.
const MAX_BODY_BYTES: usize = 200 * 1024;

/// Builds the complete API router.
pub fn build_router(extractor: AppState) -> Router {
    Router::new()
        .route("/api/extract", post(extract))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(extractor)
}

/// `POST /api/extract`: description in, validated AppSpec out.
///
/// The body is read as a raw JSON value so the 400 contract is exact: a
/// missing field, a non-string value, or a non-object body all produce the
/// same error without any upstream call.
#[tracing::instrument(skip_all)]
async fn extract(State(extractor): State<AppState>, body: String) -> Response {
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let Some(description) = body.get("description").and_then(Value::as_str) else {
        tracing::debug!("request body carried no usable description");
        return error_response(&ExtractError::InvalidInput);
    };

    match extractor.extract(description).await {
        Ok(spec) => (StatusCode::OK, Json(spec)).into_response(),
        Err(err) => error_response(&err),
    }
}

/// Maps pipeline failures onto the HTTP error contract.
///
/// `InvalidInput` is the caller's fault (400, not logged as a server fault);
/// everything else is a 500 carrying its diagnostic payload. The pipeline
/// has already logged 500-class failures with full context.
fn error_response(err: &ExtractError) -> Response {
    match err {
        ExtractError::InvalidInput => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing or invalid description"})),
        )
            .into_response(),
        ExtractError::Upstream {
            message,
            raw_response,
        } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": message, "raw_response": raw_response})),
        )
            .into_response(),
        ExtractError::Recovery { raw_output } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Invalid AI response", "raw_output": raw_output})),
        )
            .into_response(),
        ExtractError::SchemaViolation {
            violations,
            candidate,
        } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Invalid AI response",
                "violations": violations,
                "candidate": candidate,
            })),
        )
            .into_response(),
    }
}
