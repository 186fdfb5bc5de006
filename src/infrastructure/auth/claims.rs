use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (authenticated identity)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Claims for `subject`, valid for `lifetime_seconds` from now.
    ///
    /// Lifetimes past the end of the timestamp range saturate at `i64::MAX`.
    pub fn new(subject: impl Into<String>, lifetime_seconds: u64) -> Self {
        let now = chrono::Utc::now().timestamp();
        let exp = i64::try_from(lifetime_seconds)
            .ok()
            .and_then(|lifetime| now.checked_add(lifetime))
            .unwrap_or(i64::MAX);

        Self {
            sub: subject.into(),
            exp,
            iat: now,
        }
    }
}
