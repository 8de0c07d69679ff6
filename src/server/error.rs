use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failures a handler can report. Each one maps to a fixed status and
/// `{success, error, message}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest,

    #[error("resource not found")]
    NotFound,

    #[error("unprocessable")]
    Unprocessable,

    #[error("internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Turns a failed mutation into a 422, keeping the cause in the logs only.
    pub fn unprocessable(cause: impl std::fmt::Display) -> Self {
        tracing::warn!("Unprocessable request: {cause}");
        ApiError::Unprocessable
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> Self {
        ApiError::Internal(error.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(cause) = &self {
            tracing::error!("Request failed: {cause:#}");
        }
        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
