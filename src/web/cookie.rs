//! Session cookie construction for `Set-Cookie` headers.

use crate::domain::session::SESSION_COOKIE;

/// Builds the `Set-Cookie` value establishing a session.
///
/// No `Max-Age`/`Expires` is set: the cookie lives for the browser session,
/// matching the store-side lifetime of the session itself.
pub fn set_session(value: &str) -> String {
    format!("{SESSION_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax")
}

/// Builds the `Set-Cookie` value clearing the session cookie on logout.
pub fn clear_session() -> String {
    format!("{SESSION_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_session() {
        assert_eq!(
            set_session("abc.def"),
            "session=abc.def; Path=/; HttpOnly; SameSite=Lax"
        );
    }

    #[test]
    fn test_clear_session_expires_immediately() {
        assert!(clear_session().contains("Max-Age=0"));
    }
}
