use std::sync::Arc;
use std::time::Instant;

use crate::auth::{AccessTokenGuard, AdminCredentials, CredentialValidator, JwtKeys};
use crate::config::JwtConfig;
use crate::template::TemplateRepository;

#[derive(Clone)]
pub struct AppState {
    pub credential_validator: Arc<CredentialValidator>,
    pub token_guard: Arc<AccessTokenGuard>,
    pub template_store: Arc<dyn TemplateRepository>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        jwt: &JwtConfig,
        admin: AdminCredentials,
        template_store: Arc<dyn TemplateRepository>,
    ) -> Self {
        let keys = Arc::new(JwtKeys::new(jwt));
        let token_guard = Arc::new(AccessTokenGuard::new(&admin, keys.clone()));
        let credential_validator = Arc::new(CredentialValidator::new(admin, keys));

        Self {
            credential_validator,
            token_guard,
            template_store,
            started_at: Instant::now(),
        }
    }
}
