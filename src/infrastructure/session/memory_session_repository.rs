//! In-memory implementation of [`SessionRepository`].

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::repositories::SessionRepository;
use crate::domain::session::{Session, SessionId};
use crate::error::AppError;

/// Session store backed by a `HashMap` behind an async `RwLock`.
///
/// Sessions live for the lifetime of the process; a restart logs everyone
/// out, matching the browser-session semantics of the cookie. City-list
/// mutations run under the write lock, so they are atomic per session.
#[derive(Debug, Default)]
pub struct MemorySessionRepository {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn insert(&self, session: Session) -> Result<(), AppError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn find(&self, id: &SessionId) -> Result<Option<Session>, AppError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn add_city(&self, id: &SessionId, city: &str) -> Result<bool, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| AppError::not_found("Session not found", json!({})))?;
        Ok(session.cities.add(city))
    }

    async fn remove_city(&self, id: &SessionId, city: &str) -> Result<bool, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| AppError::not_found("Session not found", json!({})))?;
        Ok(session.cities.remove(city))
    }

    async fn delete(&self, id: &SessionId) -> Result<bool, AppError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(id).is_some())
    }

    async fn count(&self) -> Result<usize, AppError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.len())
    }
}
