//! Database module: models, schema and the two SQLite-backed stores.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: pool setup plus `UserStore` / `PostStore`

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Post, PublicUser, User};
pub use schema::SQLITE_INIT;
pub use sqlite::{PostStore, SqlitePool, UserStore, connect, init_schema};
