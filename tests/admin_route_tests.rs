mod common;

use axum::http::StatusCode;
use chrono::Duration;
use common::{body_string, get, login, location_of, test_app};

#[tokio::test]
async fn admin_page_requires_the_admin_role() {
    let app = test_app("admin-matrix", Duration::hours(24)).await;

    // No session: redirect, not forbidden.
    let anonymous = get(&app, "/admin", None).await;
    assert_eq!(anonymous.status(), StatusCode::FOUND);
    assert_eq!(location_of(&anonymous).as_deref(), Some("/login"));

    // Authenticated non-admin: forbidden, not a redirect.
    let alice = login(&app, "alice", "alice123").await;
    let forbidden = get(&app, "/admin", Some(&alice)).await;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_string(forbidden).await, "Forbidden");

    // Admin: the page renders.
    let admin = login(&app, "admin", "admin123").await;
    let ok = get(&app, "/admin", Some(&admin)).await;
    assert_eq!(ok.status(), StatusCode::OK);
    let page = body_string(ok).await;
    assert!(page.contains("Admin"));
}
