use axum::Form;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use serde::Deserialize;
use time::Duration;
use tracing::{error, info};

use crate::config::CONFIG;
use crate::middleware::{SESSION_COOKIE, redirect_found};
use crate::router::AppState;
use crate::session::{Identity, SESSION_TTL_HOURS};
use crate::views;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// GET /login -> the login form with no error text.
pub async fn login_form() -> Html<String> {
    Html(views::login_page(None))
}

/// POST /login -> exact credential match against the account store.
///
/// A mismatch and a storage failure both re-render the form; neither
/// reveals which field was wrong or any internal detail.
pub async fn login_submit(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let account = match state
        .storage
        .find_account_by_credentials(&form.username, &form.password)
        .await
    {
        Ok(Some(account)) => account,
        Ok(None) => {
            return Html(views::login_page(Some("Invalid credentials"))).into_response();
        }
        Err(e) => {
            error!(error = %e, "login lookup failed");
            return Html(views::login_page(Some(
                "An error occurred. Please try again.",
            )))
            .into_response();
        }
    };

    let identity = Identity {
        username: account.username,
        role: account.role,
    };
    match state.sessions.login(identity).await {
        Ok(token) => {
            info!(username = %form.username, "login succeeded");
            let jar = jar.add(session_cookie(token));
            (jar, redirect_found("/posts")).into_response()
        }
        Err(e) => {
            error!(error = %e, "session creation failed");
            Html(views::login_page(Some(
                "An error occurred. Please try again.",
            )))
            .into_response()
        }
    }
}

/// GET /logout -> destroy the session (if any) and go home.
pub async fn logout(State(state): State<AppState>, jar: PrivateCookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.logout(cookie.value()).await;
    }
    let jar = jar.remove(clear_session_cookie());
    (jar, redirect_found("/")).into_response()
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE.to_string(), token))
        .path("/")
        .http_only(true)
        .secure(CONFIG.is_production())
        .same_site(SameSite::Lax)
        .max_age(Duration::hours(SESSION_TTL_HOURS))
        .build()
}

fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE.to_string(), ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
