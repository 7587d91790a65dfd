use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, Response};
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;
use crate::middleware::{RequireLogin, redirect_found};
use crate::router::AppState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct NewPostForm {
    pub title: String,
    pub content: String,
}

/// GET /posts -> all posts, newest first.
pub async fn list_posts(
    State(state): State<AppState>,
    RequireLogin(identity): RequireLogin,
) -> Result<Html<String>, AppError> {
    let posts = state.storage.list_posts().await?;
    Ok(Html(views::posts_page(&identity, &posts)))
}

/// GET /post/new -> empty submission form.
pub async fn new_post_form(RequireLogin(identity): RequireLogin) -> Html<String> {
    Html(views::new_post_page(&identity))
}

/// POST /post/create -> insert a post authored by the session's username.
/// The author always comes from the identity snapshot; nothing in the
/// request body can override it.
pub async fn create_post(
    State(state): State<AppState>,
    RequireLogin(identity): RequireLogin,
    Form(form): Form<NewPostForm>,
) -> Result<Response, AppError> {
    let id = state
        .storage
        .create_post(&identity.username, &form.title, &form.content)
        .await?;
    debug!(id, author = %identity.username, "post created");
    Ok(redirect_found("/posts"))
}

/// POST /post/delete/{id} -> delete by id. Absent ids still redirect,
/// and there is no ownership check.
pub async fn delete_post(
    State(state): State<AppState>,
    RequireLogin(_identity): RequireLogin,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    state.storage.delete_post(id).await?;
    Ok(redirect_found("/posts"))
}
