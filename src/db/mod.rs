//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `sqlite.rs`: the `BlogStorage` access layer

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Account, Post};
pub use schema::{SEED_ACCOUNTS, SQLITE_INIT};
pub use sqlite::{BlogStorage, SqlitePool};
