//! SQL DDL for initializing the blog storage.

/// SQLite schema:
/// - `accounts`: seeded once at startup; `username` deliberately carries
///   NO unique constraint (duplicates are tolerated by the data model)
/// - `posts`: `author` is a plain text copy of the creating username
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT,
    password TEXT,
    role TEXT
);

CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    author TEXT,
    title TEXT,
    content TEXT
);
"#;

/// Fixed seed rows, inserted only when the accounts table is empty:
/// (username, password, role).
pub const SEED_ACCOUNTS: &[(&str, &str, &str)] = &[
    ("admin", "admin123", "admin"),
    ("alice", "alice123", "user"),
];
