//! SQL DDL for the two demo tables, executed on every start.

/// SQLite schema with:
/// - `users.username` UNIQUE, case-sensitive; `password` holds whichever stored form
///   the registration path produced
/// - `posts.user_id` a plain INTEGER with no foreign key, so it may point nowhere
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    content TEXT NOT NULL
);
"#;
