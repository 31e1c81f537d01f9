pub mod events;
pub mod images;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use eventdir_core::EventDirError;
use serde::Serialize;

/// Body of error responses and of the delete confirmation
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Convert errors to HTTP responses, picking the status from the
/// underlying `EventDirError` when there is one.
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<EventDirError>() {
            Some(EventDirError::MissingEvent | EventDirError::InvalidInput(_)) => {
                StatusCode::BAD_REQUEST
            }
            Some(EventDirError::NotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        let body = Json(MessageResponse {
            message: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Treat any unreadable request body as invalid input.
pub fn body_error(rejection: JsonRejection) -> EventDirError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => EventDirError::MissingEvent,
        other => EventDirError::InvalidInput(other.body_text()),
    }
}
