pub mod auth;

pub use auth::{MaybeUser, RequireLogin, SESSION_COOKIE, redirect_found};
