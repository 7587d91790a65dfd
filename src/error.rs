use axum::http::StatusCode;
use axum::response::IntoResponse;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Session store error: {0}")]
    Session(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Log the detail internally; the caller only sees a generic body.
        match &self {
            AppError::Database(e) => error!(error = %e, "storage failure"),
            AppError::Session(msg) => error!(error = %msg, "session store failure"),
        }
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "An error occurred. Please try again.",
        )
            .into_response()
    }
}
