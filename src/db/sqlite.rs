use crate::db::models::{Account, Post};
use crate::db::schema::SQLITE_INIT;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct BlogStorage {
    pool: SqlitePool,
}

impl BlogStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Open (creating the file if absent) and return a storage handle.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(sqlx::Error::from)?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), AppError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn count_accounts(&self) -> Result<i64, AppError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    /// Insert the fixed seed rows in one transaction. Callers invoke this
    /// only when `count_accounts()` reports an empty table.
    pub async fn seed_accounts(&self, rows: &[(&str, &str, &str)]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        for (username, password, role) in rows {
            sqlx::query("INSERT INTO accounts (username, password, role) VALUES (?, ?, ?)")
                .bind(username)
                .bind(password)
                .bind(role)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    /// Exact match on both fields. Usernames carry no unique constraint, so
    /// duplicates are possible; the tie-break is the lowest id.
    pub async fn find_account_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>(
            r#"SELECT id, username, password, role FROM accounts
               WHERE username = ? AND password = ?
               ORDER BY id ASC LIMIT 1"#,
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;
        Ok(account)
    }

    /// All posts, newest first.
    pub async fn list_posts(&self) -> Result<Vec<Post>, AppError> {
        let posts = sqlx::query_as::<_, Post>(
            "SELECT id, author, title, content FROM posts ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    /// Returns the new row id.
    pub async fn create_post(
        &self,
        author: &str,
        title: &str,
        content: &str,
    ) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO posts (author, title, content) VALUES (?, ?, ?)")
            .bind(author)
            .bind(title)
            .bind(content)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Deleting an id that does not exist is a silent no-op.
    pub async fn delete_post(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
