//! In-memory session store, owned by a single actor for the process
//! lifetime. Clients hold only the opaque token; the identity snapshot
//! and expiry live here.

pub mod sessions_actor;

pub use sessions_actor::{Identity, SESSION_TTL_HOURS, SessionsHandle, session_ttl, spawn};
