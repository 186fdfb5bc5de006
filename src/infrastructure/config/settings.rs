use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::env;

use crate::auth::AdminCredentials;

/// Signing secret used when nothing else is configured. Startup warns about it.
pub const DEFAULT_JWT_SECRET: &str = "CHANGE_THIS_IN_PRODUCTION_SECRET_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub admin: AdminConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime in seconds
    #[serde(default = "default_token_lifetime")]
    pub lifetime: u64,
}

#[derive(Clone, Deserialize)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

// Keep the password out of debug output and logs.
impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl AdminConfig {
    pub fn credentials(&self) -> AdminCredentials {
        AdminCredentials::new(self.username.clone(), self.password.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Storage backend: "sqlite", "postgres" or "memory".
    /// Derived from the `url` scheme when left empty.
    #[serde(default)]
    pub backend: String,
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum pooled connections
    #[serde(default = "default_database_connections")]
    pub connections: u32,
    /// Connection acquire timeout in seconds
    #[serde(default = "default_database_timeout")]
    pub timeout: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_token_lifetime() -> u64 {
    60 * 60 * 24 // 24 hours
}

fn default_database_backend() -> String {
    "sqlite".to_string()
}

fn default_database_url() -> String {
    "sqlite://templates.db?mode=rwc".to_string()
}

fn default_database_connections() -> u32 {
    5
}

fn default_database_timeout() -> u64 {
    10
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        Self::load(env::vars().collect())
    }

    /// Build settings from defaults, config files and the given environment.
    pub fn load(vars: Map<String, String>) -> Result<Self, ConfigError> {
        let run_mode = vars
            .get("RUN_MODE")
            .cloned()
            .unwrap_or_else(|| "development".into());
        let legacy_secret = vars.get("SECRET_KEY").cloned();

        // Values stay strings so numeric-looking secrets keep their exact bytes
        let builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port() as i64)?
            .set_default("jwt.secret", DEFAULT_JWT_SECRET)?
            .set_default("jwt.lifetime", default_token_lifetime() as i64)?
            .set_default("admin.username", "admin")?
            .set_default("admin.password", "password123")?
            .set_default("database.url", default_database_url())?
            .set_default("log.format", default_log_format())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // SERVER_PORT, JWT_SECRET, ADMIN_USERNAME, ADMIN_PASSWORD, DATABASE_URL, etc.
            .add_source(Environment::default().separator("_").source(Some(vars)))
            // Older deployments set the signing key as SECRET_KEY
            .set_override_option("jwt.secret", legacy_secret)?;

        let mut settings: Settings = builder.build()?.try_deserialize()?;
        if settings.database.backend.trim().is_empty() {
            settings.database.backend = backend_for_url(&settings.database.url);
        }
        Ok(settings)
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn uses_default_secret(&self) -> bool {
        self.jwt.secret == DEFAULT_JWT_SECRET
    }
}

/// Storage backend implied by a database URL scheme.
///
/// `postgres://` and `postgresql://` select PostgreSQL, `sqlite:` and bare
/// paths select SQLite. Any other scheme is passed through so the store
/// factory can reject it.
fn backend_for_url(url: &str) -> String {
    match url.split_once(':').map(|(scheme, _)| scheme.to_ascii_lowercase()) {
        Some(scheme) if scheme == "postgres" || scheme == "postgresql" => "postgres".to_string(),
        Some(scheme) if scheme == "sqlite" => "sqlite".to_string(),
        Some(scheme) if url[scheme.len()..].starts_with("://") => scheme,
        _ => default_database_backend(),
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: default_database_backend(),
            url: default_database_url(),
            connections: default_database_connections(),
            timeout: default_database_timeout(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
        }
    }
}
