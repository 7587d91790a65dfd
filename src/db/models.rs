use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `accounts` table. Passwords are stored in cleartext
/// (see README, known limitations).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub role: String,
}

/// A row of the `posts` table. `author` is a denormalized username copy,
/// not a foreign key into `accounts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Post {
    pub id: i64,
    pub author: String,
    pub title: String,
    pub content: String,
}
