//! Mapping from service outcomes to HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use todo_core::ErrorBody;
use tracing::warn;

use crate::service::TodoError;

/// The status table for every service failure.
///
/// An unknown id maps to 500, not 404. Existing clients only check for 200;
/// changing this is tracked as an open question in DESIGN.md.
pub fn status_for(err: &TodoError) -> StatusCode {
    match err {
        TodoError::Validation(_) => StatusCode::BAD_REQUEST,
        TodoError::NotFound { .. } | TodoError::DeleteFailed { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        TodoError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// A failed request, ready to be rendered as `ErrorBody` JSON.
#[derive(Debug)]
pub struct ApiFailure {
    status: StatusCode,
    body: ErrorBody,
}

impl From<TodoError> for ApiFailure {
    fn from(err: TodoError) -> Self {
        let status = status_for(&err);
        let body = match err {
            TodoError::Validation(fields) => ErrorBody {
                error: "validation failed".to_string(),
                fields,
            },
            other => ErrorBody::message(other.to_string()),
        };
        Self { status, body }
    }
}

impl From<JsonRejection> for ApiFailure {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection, "rejected request body");
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody::message(rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
