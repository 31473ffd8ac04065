use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

use crate::service::password::PolicyError;

#[derive(Debug, ThisError)]
pub enum LabError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Unique-constraint violation; carries the store's own message.
    #[error("{0}")]
    DuplicateKey(String),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("{0}")]
    BadRequest(String),

    /// The interpolated query could not be prepared or executed.
    #[error("{0}")]
    MalformedQuery(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Database error: {0}")]
    Database(SqlxError),
}

impl From<SqlxError> for LabError {
    fn from(e: SqlxError) -> Self {
        match e {
            SqlxError::Database(db_err) if db_err.is_unique_violation() => {
                LabError::DuplicateKey(db_err.message().to_string())
            }
            other => LabError::Database(other),
        }
    }
}

impl LabError {
    pub fn status(&self) -> StatusCode {
        match self {
            LabError::Unauthorized | LabError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            LabError::DuplicateKey(_)
            | LabError::Policy(_)
            | LabError::BadRequest(_)
            | LabError::MalformedQuery(_) => StatusCode::BAD_REQUEST,
            LabError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            LabError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LabError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match &self {
            LabError::Database(e) => {
                error!(error = %e, "database operation failed");
                "An internal server error occurred.".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Body of every error response: `{ "error": "..." }`.
#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}
