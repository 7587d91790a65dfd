use axum::Router;
use axum::extract::FromRef;
use axum::routing::{get, post};
use axum_extra::extract::cookie::Key;

use crate::db::BlogStorage;
use crate::handlers;
use crate::session::SessionsHandle;

/// Shared per-process context handed to every request handler; the only
/// cross-request state in the process lives here.
#[derive(Clone)]
pub struct AppState {
    pub storage: BlogStorage,
    pub sessions: SessionsHandle,
    key: Key,
}

impl AppState {
    /// `secret` keys the private cookie jar; it must be at least 32 bytes.
    pub fn new(storage: BlogStorage, sessions: SessionsHandle, secret: &str) -> Self {
        Self {
            storage,
            sessions,
            key: Key::derive_from(secret.as_bytes()),
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

impl FromRef<AppState> for SessionsHandle {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

impl FromRef<AppState> for BlogStorage {
    fn from_ref(state: &AppState) -> Self {
        state.storage.clone()
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::pages::index))
        .route(
            "/login",
            get(handlers::auth::login_form).post(handlers::auth::login_submit),
        )
        .route("/logout", get(handlers::auth::logout))
        .route("/posts", get(handlers::posts::list_posts))
        .route("/post/new", get(handlers::posts::new_post_form))
        .route("/post/create", post(handlers::posts::create_post))
        .route("/post/delete/{id}", post(handlers::posts::delete_post))
        .route("/admin", get(handlers::pages::admin))
        .with_state(state)
}
