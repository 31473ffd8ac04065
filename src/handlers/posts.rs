use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::info;

use crate::db::Post;
use crate::middleware::{LabJson, LabQuery};
use crate::service::sanitize;
use crate::{LabError, router::LabState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPostBody {
    pub user_id: i64,
    pub content: String,
}

/// `userId` left as whatever JSON scalar the client sent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNewPostBody {
    pub user_id: Value,
    pub content: String,
}

impl RawNewPostBody {
    /// Text of `userId` as it will appear in the SQL statement.
    fn raw_user_id(&self) -> Result<String, LabError> {
        match &self.user_id {
            Value::Number(n) => Ok(n.to_string()),
            Value::String(s) => Ok(s.clone()),
            _ => Err(LabError::BadRequest(
                "userId must be a number or a string".to_string(),
            )),
        }
    }
}

/// `?userId=` kept as the raw string the client sent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOwnerQuery {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerQuery {
    pub user_id: i64,
}

/// POST /post/insecure -> content stored byte-for-byte, `userId` pasted into the INSERT.
pub async fn create_post_insecure(
    State(state): State<LabState>,
    LabJson(body): LabJson<RawNewPostBody>,
) -> Result<Json<Value>, LabError> {
    let user_id = body.raw_user_id()?;
    let id = state.posts.insert_unsafe(&user_id, &body.content).await?;
    info!(post_id = id, user_id = %user_id, "stored raw post");
    Ok(Json(json!({ "success": true })))
}

/// POST /post/secure -> content sanitized before it is stored.
pub async fn create_post_secure(
    State(state): State<LabState>,
    LabJson(body): LabJson<NewPostBody>,
) -> Result<Json<Value>, LabError> {
    let clean = sanitize(&body.content);
    let id = state.posts.insert(body.user_id, &clean).await?;
    info!(post_id = id, user_id = body.user_id, "stored sanitized post");
    Ok(Json(json!({ "success": true })))
}

/// GET /posts/insecure?userId= -> runs the interpolated owner query.
pub async fn list_posts_insecure(
    State(state): State<LabState>,
    LabQuery(query): LabQuery<RawOwnerQuery>,
) -> Result<Json<Vec<Map<String, Value>>>, LabError> {
    let rows = state.posts.get_by_owner_unsafe(&query.user_id).await?;
    Ok(Json(rows))
}

/// GET /posts/secure?userId= -> `userId` must parse as an integer and is bound.
pub async fn list_posts_secure(
    State(state): State<LabState>,
    LabQuery(query): LabQuery<OwnerQuery>,
) -> Result<Json<Vec<Post>>, LabError> {
    let posts = state.posts.get_by_owner(query.user_id).await?;
    Ok(Json(posts))
}
