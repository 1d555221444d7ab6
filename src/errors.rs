use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

/// Centralized error type for the API layer. Variants map one-to-one onto the
/// HTTP statuses and message strings of the trivia wire format:
/// `{ "success": false, "error": <status>, "message": <text> }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Resources not found")]
    NotFound,

    #[error("Can't be processed")]
    Unprocessable,

    #[error("Bad request")]
    BadRequest,

    #[error("database error: {0}")]
    Database(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The client-facing message. Database details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            ApiError::Database(_) => "Database operation failed. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(ref e) = self {
            error!(error = %e, "Database error while handling request");
        }

        let status = self.status();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Database(anyhow::Error::from(err))
    }
}
