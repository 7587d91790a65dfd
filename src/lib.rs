pub mod config;
pub mod error;
pub mod db;
pub mod session;
pub mod router;
pub mod middleware;
pub mod handlers;
pub mod views;

pub use db::BlogStorage;
pub use error::AppError;
pub use session::{Identity, SessionsHandle};
