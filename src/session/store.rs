// src/session/store.rs
use crate::errors::ServerError;
use crate::session::token::{generate_token_default, hash_token};
use crate::session::Session;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

pub const SESSION_COOKIE: &str = "rs_session";

/// The token to use for this request, and whether it must be sent back
/// as a new cookie.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub token: String,
    pub fresh: bool,
}

/// In-memory sessions keyed by token hash. Idle sessions expire after `ttl`.
pub struct SessionStore {
    sessions: Mutex<HashMap<[u8; 32], Session>>,
    ttl: Duration,
    default_model: String,
}

impl SessionStore {
    pub fn new(ttl: Duration, default_model: impl Into<String>) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
            default_model: default_model.into(),
        }
    }

    /// Resume the session named by the cookie, or start a new one.
    pub fn open(
        &self,
        cookie_token: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<SessionHandle, ServerError> {
        let mut sessions = self.sessions.lock().map_err(|_| ServerError::InternalError)?;

        let before = sessions.len();
        sessions.retain(|_, s| !self.is_expired(s, now));
        if sessions.len() < before {
            debug!(pruned = before - sessions.len(), "Pruned idle sessions");
        }

        if let Some(token) = cookie_token.filter(|t| !t.is_empty()) {
            if let Some(session) = sessions.get_mut(&hash_token(token)) {
                session.last_seen = now;
                return Ok(SessionHandle {
                    token: token.to_string(),
                    fresh: false,
                });
            }
        }

        let token = generate_token_default();
        sessions.insert(hash_token(&token), Session::new(&self.default_model, now));
        debug!(active = sessions.len(), "Started session");

        Ok(SessionHandle { token, fresh: true })
    }

    /// Provides the session to the closure. Keep the closure short: the
    /// store is locked while it runs.
    pub fn with_session<F, T>(&self, token: &str, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Session) -> T,
    {
        let mut sessions = self.sessions.lock().map_err(|_| ServerError::InternalError)?;
        let session = sessions
            .entry(hash_token(token))
            .or_insert_with(|| Session::new(&self.default_model, Utc::now()));
        Ok(f(session))
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }

    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        (now - session.last_seen)
            .to_std()
            .map(|idle| idle > self.ttl)
            .unwrap_or(false)
    }
}
