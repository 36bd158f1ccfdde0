//! In-memory chat sessions. Nothing survives a restart.
//!
//! Sessions idle for longer than the idle timeout are dropped, and the
//! store never holds more than `max_sessions`. A session with a turn in
//! flight is never evicted so its reply always has somewhere to land.
use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use crate::chat::session::ChatSession;

pub const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

struct StoredSession {
    session: ChatSession,
    last_active: DateTime<Utc>,
}

pub struct SessionStore {
    sessions: HashMap<String, StoredSession>,
    idle_timeout: TimeDelta,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(
            Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
            DEFAULT_MAX_SESSIONS,
        )
    }
}

impl SessionStore {
    pub fn new(idle_timeout: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            idle_timeout: TimeDelta::from_std(idle_timeout).unwrap_or(TimeDelta::MAX),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Create a session with a fresh random ID and return a copy of it.
    pub fn create(&mut self) -> ChatSession {
        self.create_at(Utc::now())
    }

    fn create_at(&mut self, now: DateTime<Utc>) -> ChatSession {
        self.evict_idle(now);
        while self.sessions.len() >= self.max_sessions {
            if !self.evict_least_recent() {
                break;
            }
        }

        let id = Uuid::new_v4().to_string();
        let session = ChatSession::new(&id);
        self.sessions.insert(
            id,
            StoredSession {
                session: session.clone(),
                last_active: now,
            },
        );
        session
    }

    pub fn get(&self, id: &str) -> Option<&ChatSession> {
        let now = Utc::now();
        self.sessions
            .get(id)
            .filter(|stored| !self.is_expired(stored, now))
            .map(|stored| &stored.session)
    }

    /// Look up a session for modification and mark it active.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut ChatSession> {
        self.get_mut_at(id, Utc::now())
    }

    fn get_mut_at(&mut self, id: &str, now: DateTime<Utc>) -> Option<&mut ChatSession> {
        let expired = self
            .sessions
            .get(id)
            .is_some_and(|stored| self.is_expired(stored, now));
        if expired {
            tracing::debug!("Chat session {} expired", id);
            self.sessions.remove(id);
            return None;
        }
        let stored = self.sessions.get_mut(id)?;
        stored.last_active = now;
        Some(&mut stored.session)
    }

    /// Drop every idle session as of `now`. Returns how many were removed.
    pub fn evict_idle(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        let idle_timeout = self.idle_timeout;
        self.sessions.retain(|_, stored| {
            stored.session.is_in_flight() || now - stored.last_active < idle_timeout
        });
        let removed = before - self.sessions.len();
        if removed > 0 {
            tracing::debug!("Evicted {} idle chat sessions", removed);
        }
        removed
    }

    fn evict_least_recent(&mut self) -> bool {
        let oldest = self
            .sessions
            .iter()
            .filter(|(_, stored)| !stored.session.is_in_flight())
            .min_by_key(|(_, stored)| stored.last_active)
            .map(|(id, _)| id.clone());
        match oldest {
            Some(id) => {
                tracing::debug!("Session limit reached, dropping chat session {}", id);
                self.sessions.remove(&id);
                true
            }
            None => false,
        }
    }

    fn is_expired(&self, stored: &StoredSession, now: DateTime<Utc>) -> bool {
        !stored.session.is_in_flight() && now - stored.last_active >= self.idle_timeout
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
