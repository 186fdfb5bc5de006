mod app;
mod middleware;
mod state;

pub use app::create_app;
pub use middleware::{bearer_auth, extract_bearer_token, AdminIdentity};
pub use state::AppState;
