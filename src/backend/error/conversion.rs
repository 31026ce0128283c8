/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "message": "User doesn't exist",
 *   "status": 404
 * }
 * ```
 *
 * Dependency failures are logged here, at the handler boundary, and the
 * client only sees the generic internal error message.
 */

use axum::response::{IntoResponse, Json, Response};
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
        }

        let body = serde_json::json!({
            "message": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
