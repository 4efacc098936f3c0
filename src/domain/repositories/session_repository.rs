//! Repository trait for login session storage.

use crate::domain::session::{Session, SessionId};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for login sessions and their city lists.
///
/// City-list mutations are repository methods rather than read-modify-write
/// on the caller side so an implementation can apply them atomically; with
/// that, concurrent add/remove/refresh requests for one session cannot lose
/// updates.
///
/// # Implementations
///
/// - [`crate::infrastructure::session::MemorySessionRepository`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores a freshly created session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, session: Session) -> Result<(), AppError>;

    /// Looks up a session by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find(&self, id: &SessionId) -> Result<Option<Session>, AppError>;

    /// Appends a city to the session's list if absent.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the city was added
    /// - `Ok(false)` if the city was already present (no-op)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the session does not exist.
    async fn add_city(&self, id: &SessionId, city: &str) -> Result<bool, AppError>;

    /// Removes a city from the session's list.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the city was present and removed
    /// - `Ok(false)` if the city was absent (no-op)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the session does not exist.
    async fn remove_city(&self, id: &SessionId, city: &str) -> Result<bool, AppError>;

    /// Deletes a session. Idempotent.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a session was deleted, `Ok(false)` if none existed.
    async fn delete(&self, id: &SessionId) -> Result<bool, AppError>;

    /// Number of live sessions, for health reporting.
    async fn count(&self) -> Result<usize, AppError>;
}
