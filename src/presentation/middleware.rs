//! HTTP middleware for the web server

use axum::{
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use std::time::Instant;
use uuid::Uuid;

use crate::domain::DomainError;
use crate::presentation::models::ErrorResponse;

/// Map domain errors onto structured HTTP error responses.
///
/// Validation failures are client errors: the request was well-formed at
/// the protocol level but violated a declared constraint, so they map to
/// 422 with the offending field named in the details.
impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let (status, code, details) = match &self {
            DomainError::InvalidInput { field, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                serde_json::json!({ "field": field, "message": message }),
            ),
        };

        let body = ErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
            details: Some(details),
            request_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        };

        (status, Json(body)).into_response()
    }
}

/// Request logging middleware with timing and request ID
pub async fn logging_middleware(request: Request<axum::body::Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = Uuid::new_v4();
    let start = Instant::now();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        "Processing request"
    );

    let response = next.run(request).await;

    tracing::info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status(),
        duration_ms = start.elapsed().as_millis(),
        "Request completed"
    );

    response
}
