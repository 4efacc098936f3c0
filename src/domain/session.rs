//! Login sessions and per-session city lists.

use chrono::{DateTime, Utc};

/// Name of the session cookie sent to the browser.
pub const SESSION_COOKIE: &str = "session";

/// Opaque identifier of a login session.
///
/// The raw value is random hex generated at login; the browser only ever
/// sees it wrapped in a signed cookie (see
/// [`crate::application::services::SessionService`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A logged-in user's server-side state.
///
/// Created on successful login, destroyed on logout. The city list lives
/// here so the dashboard state survives page reloads for the lifetime of
/// the session cookie.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub username: String,
    pub cities: CityList,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: SessionId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            cities: CityList::default(),
            created_at: Utc::now(),
        }
    }
}

/// An ordered, duplicate-free list of city names.
///
/// Order is insertion order and determines the order of dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityList(Vec<String>);

impl CityList {
    /// Appends a city if it is not already present.
    ///
    /// Returns `true` if the city was added, `false` if the add was a no-op
    /// because the city is already in the list.
    pub fn add(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.0.push(name.to_string());
        true
    }

    /// Removes a city by name.
    ///
    /// Returns `true` if the city was present, `false` if the remove was a
    /// no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|c| c != name);
        self.0.len() < before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl<S: Into<String>> FromIterator<S> for CityList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut list = CityList::default();
        for name in iter {
            list.add(&name.into());
        }
        list
    }
}

/// Extracts the session cookie value from a `Cookie` request header.
///
/// Handles multiple cookies by splitting on semicolons and ignoring
/// everything that is not the session cookie.
pub fn session_cookie_value(cookie_header: &str) -> Option<&str> {
    cookie_header.split(';').find_map(|cookie| {
        let mut parts = cookie.trim().splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(SESSION_COOKIE), Some(value)) => Some(value),
            _ => None,
        }
    })
}
