//! Error to HTTP status mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::TriviaError;

impl IntoResponse for TriviaError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            tracing::warn!("Rejected request: {}", self);
        } else {
            tracing::error!("Request failed: {}", self);
        }

        match self {
            TriviaError::NotFound(_) => (StatusCode::NOT_FOUND, "Question not found").into_response(),
            TriviaError::EmptyStore => (StatusCode::NOT_FOUND, "No questions available").into_response(),
            TriviaError::MalformedRequest(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid question identifier: {id}"),
            )
                .into_response(),
            e => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        }
    }
}
