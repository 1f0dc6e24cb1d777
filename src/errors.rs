use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub type RestResult<T> = Result<T, RestError>;

/// Fatal startup failures; anything after startup answers over HTTP instead.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Cannot bind address: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot serve application: {0}")]
    CannotServe(std::io::Error),
}

/// Request-level failures, mapped to the wire error shape at the boundary.
#[derive(Debug, Error, PartialEq)]
pub enum RestError {
    /// Referenced note id is not in the store.
    #[error("Note not found")]
    NoteNotFound,
    /// Body is a JSON object but lacks `title` or `content`.
    #[error("Missing 'title' or 'content'")]
    MissingFields,
    /// Body is absent, undecodable, or not a JSON object.
    #[error("Request body must be a JSON object")]
    InvalidBody,
    /// Path didn't match a route; also covers non-numeric id segments.
    #[error("The requested resource was not found")]
    UnknownRoute,
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Wire shape shared by every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: u16,
    description: String,
}

impl RestError {
    fn status(&self) -> StatusCode {
        match self {
            RestError::NoteNotFound | RestError::UnknownRoute => StatusCode::NOT_FOUND,
            RestError::MissingFields | RestError::InvalidBody => StatusCode::BAD_REQUEST,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: status.as_u16(),
            description: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
