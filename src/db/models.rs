use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full `users` row, stored password included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// The fields of a user that are safe to hand back to a caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
}
