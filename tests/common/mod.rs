use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use chrono::Duration;
use cyberclash::db::{BlogStorage, SEED_ACCOUNTS};
use cyberclash::router::{AppState, app_router};
use cyberclash::session;
use std::time::{SystemTime, UNIX_EPOCH};
use tower::ServiceExt;

const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Build a full router backed by a unique temp-file SQLite database with
/// the standard seed accounts and the given session TTL.
pub async fn test_app(tag: &str, ttl: Duration) -> Router {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "cyberclash-{tag}-{}-{nanos}.sqlite",
        std::process::id()
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let storage = BlogStorage::connect(&database_url)
        .await
        .expect("temp sqlite");
    storage.init_schema().await.expect("schema init");
    storage.seed_accounts(SEED_ACCOUNTS).await.expect("seeding");

    let sessions = session::spawn(ttl).await;
    let state = AppState::new(storage, sessions, TEST_SECRET);
    app_router(state)
}

pub async fn get(app: &Router, path: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).expect("failed to build request"))
        .await
        .expect("request failed")
}

pub async fn post_form(
    app: &Router,
    path: &str,
    form_body: &str,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(
            builder
                .body(Body::from(form_body.to_string()))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed")
}

/// Log in and return the `name=value` session cookie pair.
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let resp = post_form(
        app,
        "/login",
        &format!("username={username}&password={password}"),
        None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND, "login did not redirect");
    session_cookie_from(&resp).expect("login response carried no session cookie")
}

/// Extract the session cookie pair from a response's `set-cookie` header.
pub fn session_cookie_from(resp: &Response<Body>) -> Option<String> {
    let set_cookie = resp.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    let pair = set_cookie.split(';').next()?.trim();
    pair.starts_with("sid=").then(|| pair.to_string())
}

pub fn location_of(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}
