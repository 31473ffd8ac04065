use crate::db::models::{Post, User};
use crate::db::schema::SQLITE_INIT;
use crate::error::LabError;
use serde_json::{Map, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Column, Pool, Row, Sqlite, TypeInfo, ValueRef};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Open the pool (creating the file if missing) and make sure both tables exist.
pub async fn connect(database_url: &str) -> Result<SqlitePool, LabError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// Initialize the schema by executing the bundled DDL.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), LabError> {
    // sqlx::query runs one statement at a time
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

/// Errors raised while running an interpolated query are reported back verbatim.
fn unsafe_query_error(e: sqlx::Error) -> LabError {
    match e {
        sqlx::Error::Database(db_err) => LabError::MalformedQuery(db_err.message().to_string()),
        other => other.into(),
    }
}

#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user with an already-chosen stored password form. Returns the row id.
    /// A taken username fails with `LabError::DuplicateKey`.
    pub async fn insert(&self, username: &str, stored_password: &str) -> Result<i64, LabError> {
        let res = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(stored_password)
            .execute(&self.pool)
            .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>, LabError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, LabError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Credential check built by pasting both inputs into the SQL text.
    /// Neither value is validated or escaped.
    pub async fn find_by_credentials_unsafe(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, LabError> {
        let sql = format!(
            "SELECT id, username, password FROM users WHERE username = '{username}' AND password = '{password}'"
        );
        sqlx::query_as::<_, User>(&sql)
            .fetch_optional(&self.pool)
            .await
            .map_err(unsafe_query_error)
    }
}

#[derive(Clone)]
pub struct PostStore {
    pool: SqlitePool,
}

impl PostStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// `user_id` is not checked against `users`.
    pub async fn insert(&self, user_id: i64, content: &str) -> Result<i64, LabError> {
        let res = sqlx::query("INSERT INTO posts (user_id, content) VALUES (?, ?)")
            .bind(user_id)
            .bind(content)
            .execute(&self.pool)
            .await?;
        Ok(res.last_insert_rowid())
    }

    /// Insert with `user_id` interpolated straight into the SQL text. Only
    /// `content` is bound, so it is stored exactly as given.
    pub async fn insert_unsafe(&self, user_id: &str, content: &str) -> Result<i64, LabError> {
        let sql = format!("INSERT INTO posts (user_id, content) VALUES ({user_id}, ?)");
        let res = sqlx::query(&sql)
            .bind(content)
            .execute(&self.pool)
            .await
            .map_err(unsafe_query_error)?;
        Ok(res.last_insert_rowid())
    }

    pub async fn get_by_owner(&self, user_id: i64) -> Result<Vec<Post>, LabError> {
        let posts = sqlx::query_as::<_, Post>(
            "SELECT id, user_id, content FROM posts WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    /// Owner lookup with `user_id` interpolated straight into the SQL text.
    ///
    /// Rows are decoded column by column, so anything an injected `UNION SELECT`
    /// yields comes back alongside genuine posts.
    pub async fn get_by_owner_unsafe(
        &self,
        user_id: &str,
    ) -> Result<Vec<Map<String, Value>>, LabError> {
        let sql = format!("SELECT id, user_id, content FROM posts WHERE user_id = {user_id}");
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(unsafe_query_error)?;
        rows.iter()
            .map(row_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map_err(LabError::from)
    }
}

fn row_to_json(row: &SqliteRow) -> Result<Map<String, Value>, sqlx::Error> {
    let mut obj = Map::new();
    for (idx, column) in row.columns().iter().enumerate() {
        let raw = row.try_get_raw(idx)?;
        let value = if raw.is_null() {
            Value::Null
        } else {
            let type_name = raw.type_info().name().to_string();
            match type_name.as_str() {
                "INTEGER" | "BOOLEAN" => Value::from(row.try_get_unchecked::<i64, _>(idx)?),
                "REAL" => Value::from(row.try_get_unchecked::<f64, _>(idx)?),
                "BLOB" => Value::from(row.try_get_unchecked::<Vec<u8>, _>(idx)?),
                _ => Value::from(row.try_get_unchecked::<String, _>(idx)?),
            }
        };
        obj.insert(column.name().to_string(), value);
    }
    Ok(obj)
}
