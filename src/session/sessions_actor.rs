use crate::error::AppError;

use chrono::{DateTime, Duration, Utc};
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

/// Fixed absolute session lifetime, in hours.
pub const SESSION_TTL_HOURS: i64 = 24;

/// The fixed session lifetime as a duration.
pub fn session_ttl() -> Duration {
    Duration::hours(SESSION_TTL_HOURS)
}

/// The {username, role} snapshot captured at login time. It is never
/// re-validated against the account store afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub username: String,
    pub role: String,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

struct SessionEntry {
    identity: Identity,
    expires_at: DateTime<Utc>,
}

/// Public messages handled by the sessions actor.
pub enum SessionsActorMessage {
    /// Bind a fresh token to an identity snapshot; replies with the token.
    Login(Identity, RpcReplyPort<String>),
    /// Resolve a token; replies None for unknown or expired tokens.
    Lookup(String, RpcReplyPort<Option<Identity>>),
    /// Drop a token unconditionally (idempotent).
    Logout(String),
}

/// Handle for interacting with the sessions actor.
#[derive(Clone)]
pub struct SessionsHandle {
    actor: ActorRef<SessionsActorMessage>,
}

impl SessionsHandle {
    /// Create a session for an authenticated identity; returns the opaque
    /// token to transport to the client.
    pub async fn login(&self, identity: Identity) -> Result<String, AppError> {
        ractor::call!(self.actor, SessionsActorMessage::Login, identity)
            .map_err(|e| AppError::Session(format!("Login RPC failed: {e}")))
    }

    /// Resolve a token to its identity snapshot, if still valid.
    pub async fn lookup(&self, token: &str) -> Result<Option<Identity>, AppError> {
        ractor::call!(self.actor, SessionsActorMessage::Lookup, token.to_string())
            .map_err(|e| AppError::Session(format!("Lookup RPC failed: {e}")))
    }

    /// Destroy a session. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) {
        let _ = ractor::cast!(self.actor, SessionsActorMessage::Logout(token.to_string()));
    }
}

/// Internal state held by the ractor-driven sessions actor.
struct SessionsActorState {
    ttl: Duration,
    sessions: HashMap<String, SessionEntry>,
}

struct SessionsActor;

#[ractor::async_trait]
impl Actor for SessionsActor {
    type Msg = SessionsActorMessage;
    type State = SessionsActorState;
    type Arguments = Duration;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        ttl: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        info!(ttl_secs = ttl.num_seconds(), "SessionsActor started");
        Ok(SessionsActorState {
            ttl,
            sessions: HashMap::new(),
        })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            SessionsActorMessage::Login(identity, rp) => {
                let token = Uuid::new_v4().to_string();
                let expires_at = Utc::now() + state.ttl;
                debug!(username = %identity.username, "session created");
                state.sessions.insert(
                    token.clone(),
                    SessionEntry {
                        identity,
                        expires_at,
                    },
                );
                let _ = rp.send(token);
            }
            SessionsActorMessage::Lookup(token, rp) => {
                // Expired entries are dropped lazily here; they must never
                // resolve even while still present in the map.
                let identity = match state.sessions.get(&token) {
                    Some(entry) if entry.expires_at > Utc::now() => {
                        Some(entry.identity.clone())
                    }
                    Some(_) => {
                        state.sessions.remove(&token);
                        None
                    }
                    None => None,
                };
                let _ = rp.send(identity);
            }
            SessionsActorMessage::Logout(token) => {
                if state.sessions.remove(&token).is_some() {
                    debug!("session destroyed");
                }
            }
        }
        Ok(())
    }
}

/// Async spawn of the sessions actor and return a handle.
pub async fn spawn(ttl: Duration) -> SessionsHandle {
    let (actor, _jh) = Actor::spawn(None, SessionsActor, ttl)
        .await
        .expect("failed to spawn SessionsActor");
    SessionsHandle { actor }
}
