mod claims;
mod credentials;
mod guard;
mod jwt;

use thiserror::Error;

pub use claims::Claims;
pub use credentials::{AccessToken, AdminCredentials, CredentialValidator};
pub use guard::AccessTokenGuard;
pub use jwt::JwtKeys;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token subject is not authorized")]
    UnknownSubject,

    #[error("Failed to sign token: {0}")]
    Signing(String),
}

impl AuthError {
    /// Short label used for metrics and logs
    pub fn reason(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::MissingToken => "missing_token",
            AuthError::InvalidToken(_) => "invalid_token",
            AuthError::UnknownSubject => "unknown_subject",
            AuthError::Signing(_) => "signing",
        }
    }
}
