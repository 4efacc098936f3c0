//! Credential verification for the login form.

/// Service checking submitted credentials against the configured pair.
///
/// The dashboard accepts exactly one username/password combination, loaded
/// from configuration at startup. Comparison is case-sensitive and exact;
/// there are no accounts, lockouts, or recoverable error classes.
pub struct AuthService {
    username: String,
    password: String,
}

impl AuthService {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    /// Returns `true` iff both submitted values match the configured pair.
    pub fn verify_credentials(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new("ipgautomotive".to_string(), "carmaker".to_string())
    }

    #[test]
    fn test_valid_pair_accepted() {
        assert!(service().verify_credentials("ipgautomotive", "carmaker"));
    }

    #[test]
    fn test_wrong_password_rejected() {
        assert!(!service().verify_credentials("ipgautomotive", "wrong"));
    }

    #[test]
    fn test_wrong_username_rejected() {
        assert!(!service().verify_credentials("someone", "carmaker"));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        assert!(!service().verify_credentials("IPGAutomotive", "carmaker"));
        assert!(!service().verify_credentials("ipgautomotive", "CarMaker"));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(!service().verify_credentials("", ""));
    }
}
