use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
    BadRequest(String),
    Conflict(String),
    RateLimited(u64),
    Internal(String),
    Database(sqlx::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "missing: {msg}"),
            AppError::Unauthorized(msg) => write!(f, "admin token refused: {msg}"),
            AppError::Forbidden(msg) => write!(f, "admin access disabled: {msg}"),
            AppError::BadRequest(msg) => write!(f, "rejected submission: {msg}"),
            AppError::Conflict(msg) => write!(f, "already recorded: {msg}"),
            AppError::RateLimited(secs) => write!(f, "too many submissions, retry in {secs}s"),
            AppError::Internal(msg) => write!(f, "server failure: {msg}"),
            AppError::Database(err) => write!(f, "postgres failure: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::RateLimited(secs) => {
                let body = json!({
                    "error": format!("Too many submissions for this course. Retry after {secs}s"),
                    "retry_after": secs,
                });
                return (
                    StatusCode::TOO_MANY_REQUESTS,
                    [("retry-after", secs.to_string())],
                    axum::Json(body),
                )
                    .into_response();
            }
            AppError::Internal(_) | AppError::Database(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong, try again later".to_string(),
                )
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}
