use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::db::{PostStore, SqlitePool, UserStore};
use crate::handlers::{health, posts, register, users};
use crate::middleware::require_bearer;

/// Shared handles injected into every handler.
#[derive(Clone)]
pub struct LabState {
    pub pool: SqlitePool,
    pub users: UserStore,
    pub posts: PostStore,
}

impl LabState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserStore::new(pool.clone()),
            posts: PostStore::new(pool.clone()),
            pool,
        }
    }
}

pub fn lab_router(state: LabState, body_limit: usize) -> Router {
    let gated = Router::new()
        .route("/user/{id}/secure", get(users::get_user_secure))
        .route_layer(middleware::from_fn(require_bearer));

    Router::new()
        .route("/health", get(health::health))
        .route("/user/{id}", get(users::get_user))
        .route("/register/insecure", post(register::register_insecure))
        .route("/register/secure", post(register::register_secure))
        .route("/login/insecure", post(register::login_insecure))
        .route("/login/secure", post(register::login_secure))
        .route("/posts/insecure", get(posts::list_posts_insecure))
        .route("/posts/secure", get(posts::list_posts_secure))
        .route("/post/insecure", post(posts::create_post_insecure))
        .route("/post/secure", post(posts::create_post_secure))
        .merge(gated)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
