use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Key, PrivateCookieJar};
use tracing::warn;

use crate::session::{Identity, SessionsHandle};

/// Cookie carrying the opaque session token.
pub const SESSION_COOKIE: &str = "sid";

/// A plain `302 Found` redirect. axum's `Redirect` constructors emit
/// 303/307/308, but this surface promises 302s.
pub fn redirect_found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

async fn resolve_session<S>(parts: &mut Parts, state: &S) -> Result<Option<Identity>, Response>
where
    S: Send + Sync,
    Key: FromRef<S>,
    SessionsHandle: FromRef<S>,
{
    let jar = PrivateCookieJar::<Key>::from_request_parts(parts, state)
        .await
        .map_err(|err| match err {})?;

    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Ok(None);
    };

    let sessions = SessionsHandle::from_ref(state);
    sessions
        .lookup(cookie.value())
        .await
        .map_err(|e| e.into_response())
}

/// Auth gate: resolves the session cookie and rejects with a redirect to
/// the login page when no valid session exists. The protected handler is
/// never invoked on rejection.
#[derive(Debug, Clone)]
pub struct RequireLogin(pub Identity);

impl<S> FromRequestParts<S> for RequireLogin
where
    S: Send + Sync,
    Key: FromRef<S>,
    SessionsHandle: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match resolve_session(parts, state).await? {
            Some(identity) => Ok(Self(identity)),
            None => Err(redirect_found("/login")),
        }
    }
}

/// Like [`RequireLogin`] but never rejects; pages open to anonymous
/// visitors use it to show the identity when one is present.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<Identity>);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
    Key: FromRef<S>,
    SessionsHandle: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match resolve_session(parts, state).await {
            Ok(identity) => Ok(Self(identity)),
            Err(_) => {
                // A session-store failure on an open page degrades to
                // anonymous rather than failing the request.
                warn!("session lookup failed on open page; treating as anonymous");
                Ok(Self(None))
            }
        }
    }
}
