use std::sync::Arc;

use serde::Serialize;

use super::{AuthError, JwtKeys};

/// The single privileged identity allowed to use the service.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        self.username.as_bytes() == username.as_bytes()
            && self.password.as_bytes() == password.as_bytes()
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Token returned by a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

impl AccessToken {
    pub fn bearer(token: String) -> Self {
        Self {
            access_token: token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Exchanges the administrator's username and password for a signed token.
pub struct CredentialValidator {
    admin: AdminCredentials,
    keys: Arc<JwtKeys>,
}

impl CredentialValidator {
    pub fn new(admin: AdminCredentials, keys: Arc<JwtKeys>) -> Self {
        Self { admin, keys }
    }

    /// Unknown usernames and wrong passwords fail identically.
    pub fn login(&self, username: &str, password: &str) -> Result<AccessToken, AuthError> {
        if !self.admin.matches(username, password) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.keys.issue(username)?;

        tracing::info!(
            subject = %username,
            lifetime_seconds = self.keys.lifetime_seconds(),
            "Access token issued"
        );

        Ok(AccessToken::bearer(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;

    fn validator() -> CredentialValidator {
        let keys = Arc::new(JwtKeys::new(&JwtConfig {
            secret: "test-secret".to_string(),
            lifetime: 3600,
        }));
        CredentialValidator::new(AdminCredentials::new("admin", "password123"), keys)
    }

    #[test]
    fn test_login_success_issues_bearer_token() {
        let token = validator().login("admin", "password123").unwrap();
        assert_eq!(token.token_type, "bearer");
        assert!(!token.access_token.is_empty());
    }

    #[test]
    fn test_wrong_password_and_unknown_user_fail_the_same() {
        let validator = validator();

        let wrong_password = validator.login("admin", "nope").unwrap_err();
        let unknown_user = validator.login("root", "password123").unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_user, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        assert!(validator().login("Admin", "password123").is_err());
        assert!(validator().login("admin", "Password123").is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        let creds = AdminCredentials::new("admin", "hunter2");
        assert!(!format!("{:?}", creds).contains("hunter2"));
    }
}
