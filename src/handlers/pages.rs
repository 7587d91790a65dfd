use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::middleware::{MaybeUser, RequireLogin};
use crate::views;

/// GET / -> landing page, open to anonymous visitors.
pub async fn index(MaybeUser(user): MaybeUser) -> Html<String> {
    Html(views::index_page(user.as_ref()))
}

/// GET /admin -> admin page. The role check happens here, not in the auth
/// gate: an authenticated non-admin gets a 403, not a redirect.
pub async fn admin(RequireLogin(identity): RequireLogin) -> Response {
    if !identity.is_admin() {
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    }
    Html(views::admin_page(&identity)).into_response()
}
