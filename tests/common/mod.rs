#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

pub struct TestApp {
    pub app: Router,
    pub pool: vulnlab::db::SqlitePool,
    temp_path: PathBuf,
}

impl TestApp {
    pub async fn spawn(tag: &str) -> Self {
        Self::spawn_with_limit(tag, vulnlab::Config::default().body_limit).await
    }

    pub async fn spawn_with_limit(tag: &str, body_limit: usize) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut temp_path = std::env::temp_dir();
        temp_path.push(format!(
            "vulnlab-{}-{}-{}.sqlite",
            tag,
            std::process::id(),
            nanos
        ));

        let database_url = format!("sqlite:{}", temp_path.display());
        let pool = vulnlab::db::connect(&database_url)
            .await
            .expect("failed to open test database");
        let state = vulnlab::router::LabState::new(pool.clone());
        let app = vulnlab::router::lab_router(state, body_limit);

        Self {
            app,
            pool,
            temp_path,
        }
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let resp = self.app.clone().oneshot(req).await.expect("request failed");
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).expect("response body was not json")
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
    }

    pub async fn get_with_auth(&self, uri: &str, auth: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header("authorization", auth)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: impl Into<String>) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.into()))
                .expect("failed to build request"),
        )
        .await
    }

    pub async fn stored_password(&self, username: &str) -> String {
        let rec: (String,) = sqlx::query_as("SELECT password FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .expect("user row missing");
        rec.0
    }

    pub async fn clear_users(&self) {
        sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await
            .expect("failed to clear users");
    }

    pub async fn cleanup(self) {
        self.pool.close().await;
        let _ = fs::remove_file(&self.temp_path);
        for suffix in ["-wal", "-shm"] {
            let mut side = self.temp_path.clone().into_os_string();
            side.push(suffix);
            let _ = fs::remove_file(side);
        }
    }
}
