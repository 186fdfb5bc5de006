use std::sync::Arc;

use super::{AdminCredentials, AuthError, JwtKeys};

/// Verifies bearer tokens presented on protected calls.
pub struct AccessTokenGuard {
    admin_username: String,
    keys: Arc<JwtKeys>,
}

impl AccessTokenGuard {
    pub fn new(admin: &AdminCredentials, keys: Arc<JwtKeys>) -> Self {
        Self {
            admin_username: admin.username().to_string(),
            keys,
        }
    }

    /// Returns the authenticated identity for a valid, unexpired admin token.
    pub fn authorize(&self, token: &str) -> Result<String, AuthError> {
        let claims = self.keys.verify(token)?;

        if claims.sub.is_empty() || claims.sub != self.admin_username {
            return Err(AuthError::UnknownSubject);
        }

        Ok(claims.sub)
    }
}
