use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::middleware::LabJson;
use crate::service::password;
use crate::{LabError, router::LabState};

#[derive(Debug, Deserialize)]
pub struct CredentialsBody {
    pub username: String,
    pub password: String,
}

/// POST /register/insecure -> stores the password exactly as sent.
pub async fn register_insecure(
    State(state): State<LabState>,
    LabJson(body): LabJson<CredentialsBody>,
) -> Result<Json<Value>, LabError> {
    let id = state.users.insert(&body.username, &body.password).await?;
    info!(user_id = id, "registered user with plaintext password");
    Ok(Json(json!({ "success": true })))
}

/// POST /register/secure -> stores an Argon2id PHC string instead of the password.
pub async fn register_secure(
    State(state): State<LabState>,
    LabJson(body): LabJson<CredentialsBody>,
) -> Result<Json<Value>, LabError> {
    let stored = password::hash(&body.password)?;
    let id = state.users.insert(&body.username, &stored).await?;
    info!(user_id = id, "registered user with hashed password");
    Ok(Json(json!({ "success": true })))
}

/// POST /login/insecure -> both fields are pasted into the lookup query.
pub async fn login_insecure(
    State(state): State<LabState>,
    LabJson(body): LabJson<CredentialsBody>,
) -> Result<Json<Value>, LabError> {
    let user = state
        .users
        .find_by_credentials_unsafe(&body.username, &body.password)
        .await?
        .ok_or(LabError::InvalidCredentials)?;
    info!(user_id = user.id, "insecure login accepted");
    Ok(Json(login_body(user.id, &user.username)))
}

/// POST /login/secure -> parameterized lookup, then `verify` against the stored hash.
pub async fn login_secure(
    State(state): State<LabState>,
    LabJson(body): LabJson<CredentialsBody>,
) -> Result<Json<Value>, LabError> {
    let Some(user) = state.users.get_by_username(&body.username).await? else {
        return Err(LabError::InvalidCredentials);
    };
    if !password::verify(&body.password, &user.password) {
        warn!(user_id = user.id, "secure login rejected");
        return Err(LabError::InvalidCredentials);
    }
    info!(user_id = user.id, "secure login accepted");
    Ok(Json(login_body(user.id, &user.username)))
}

fn login_body(id: i64, username: &str) -> Value {
    json!({ "success": true, "id": id, "username": username })
}
