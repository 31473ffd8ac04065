use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use sqlx::Connection;
use tracing::error;

use crate::router::LabState;

#[derive(Debug, Serialize)]
pub struct Health {
    status: &'static str,
    database: &'static str,
}

/// GET /health -> pings the store through a pooled connection.
pub async fn health(State(state): State<LabState>) -> (StatusCode, Json<Health>) {
    let result = match state.pool.acquire().await {
        Ok(mut conn) => conn.ping().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => (
            StatusCode::OK,
            Json(Health {
                status: "ok",
                database: "ok",
            }),
        ),
        Err(e) => {
            error!(error = %e, "failed to ping database");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Health {
                    status: "degraded",
                    database: "error",
                }),
            )
        }
    }
}
