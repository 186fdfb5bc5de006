mod settings;

pub use settings::{
    AdminConfig, DatabaseConfig, JwtConfig, LogConfig, ServerConfig, Settings, DEFAULT_JWT_SECRET,
};
