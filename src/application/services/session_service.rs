//! Session lifecycle: creation, cookie signing, validation, teardown.

use hmac::{Hmac, Mac};
use rand::RngCore;
use serde_json::json;
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::catalog;
use crate::domain::repositories::SessionRepository;
use crate::domain::session::{Session, SessionId};
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// The session a validated request belongs to.
///
/// Inserted into request extensions by the auth middleware and read by
/// handlers.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub id: SessionId,
    pub username: String,
}

/// Service owning session creation, cookie integrity, and city-list access.
///
/// The browser holds a single cookie `session=<id>.<mac>` where `<mac>` is
/// an HMAC-SHA256 of the session id keyed by `signing_secret`. A forged or
/// tampered cookie fails MAC verification before the store is consulted.
pub struct SessionService {
    repository: Arc<dyn SessionRepository>,
    signing_secret: String,
}

impl SessionService {
    /// Creates a new session service.
    ///
    /// # Arguments
    ///
    /// - `repository` - session store
    /// - `signing_secret` - HMAC key; rotating it invalidates all cookies
    pub fn new(repository: Arc<dyn SessionRepository>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Signs a session id with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn sign(&self, session_id: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(session_id.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Creates a session for `username` and returns the cookie value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(&self, username: &str) -> Result<(SessionId, String), AppError> {
        let mut raw = [0u8; 32];
        rand::rng().fill_bytes(&mut raw);
        let id = SessionId::new(hex::encode(raw));

        self.repository
            .insert(Session::new(id.clone(), username))
            .await?;

        let cookie_value = format!("{}.{}", id.as_str(), self.sign(id.as_str()));
        tracing::info!(username, "session created");
        Ok((id, cookie_value))
    }

    /// Validates a session cookie value and resolves the session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if:
    /// - the cookie value is not `<id>.<mac>`
    /// - MAC verification fails
    /// - no live session exists for the id
    pub async fn authenticate(&self, cookie_value: &str) -> Result<CurrentSession, AppError> {
        let (id, mac_hex) = cookie_value
            .split_once('.')
            .ok_or_else(|| unauthorized("Malformed session cookie"))?;

        let mac_bytes =
            hex::decode(mac_hex).map_err(|_| unauthorized("Malformed session cookie"))?;

        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(id.as_bytes());
        mac.verify_slice(&mac_bytes)
            .map_err(|_| unauthorized("Invalid session signature"))?;

        let id = SessionId::new(id);
        let session = self
            .repository
            .find(&id)
            .await?
            .ok_or_else(|| unauthorized("Session expired"))?;

        Ok(CurrentSession {
            id: session.id,
            username: session.username,
        })
    }

    /// Destroys a session. Idempotent; destroying an already-destroyed
    /// session is not an error.
    pub async fn destroy(&self, id: &SessionId) -> Result<(), AppError> {
        let removed = self.repository.delete(id).await?;
        if removed {
            tracing::info!(session = %id, "session destroyed");
        }
        Ok(())
    }

    /// The session's city list, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the session no longer exists.
    pub async fn cities(&self, id: &SessionId) -> Result<Vec<String>, AppError> {
        let session = self
            .repository
            .find(id)
            .await?
            .ok_or_else(|| unauthorized("Session expired"))?;
        Ok(session.cities.to_vec())
    }

    /// Adds a catalog city to the session's list.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the city was appended
    /// - `Ok(false)` if it was already present (no-op)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a city not in the catalog and
    /// [`AppError::NotFound`] if the session no longer exists.
    pub async fn add_city(&self, id: &SessionId, city: &str) -> Result<bool, AppError> {
        if !catalog::is_known_city(city) {
            return Err(AppError::bad_request(
                "Unknown city",
                json!({ "city": city }),
            ));
        }
        self.repository.add_city(id, city).await
    }

    /// Removes a city from the session's list.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the city was present, `Ok(false)` for a no-op.
    pub async fn remove_city(&self, id: &SessionId, city: &str) -> Result<bool, AppError> {
        self.repository.remove_city(id, city).await
    }

    /// Number of live sessions, for health reporting.
    pub async fn active_sessions(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}

fn unauthorized(reason: &str) -> AppError {
    AppError::unauthorized("Unauthorized", json!({ "reason": reason }))
}
