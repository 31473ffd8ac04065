use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::db::PublicUser;
use crate::middleware::LabPath;
use crate::{LabError, router::LabState};

/// GET /user/{id} -> the whole row, stored password included.
pub async fn get_user(
    State(state): State<LabState>,
    LabPath(id): LabPath<i64>,
) -> Result<Response, LabError> {
    Ok(match state.users.get_by_id(id).await? {
        Some(user) => Json(user).into_response(),
        None => Json(json!({})).into_response(),
    })
}

/// GET /user/{id}/secure -> `{id, username}` only. Mounted behind the bearer gate.
pub async fn get_user_secure(
    State(state): State<LabState>,
    LabPath(id): LabPath<i64>,
) -> Result<Response, LabError> {
    Ok(match state.users.get_by_id(id).await? {
        Some(user) => Json(PublicUser::from(user)).into_response(),
        None => Json(json!({})).into_response(),
    })
}
