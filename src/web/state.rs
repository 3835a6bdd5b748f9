use crate::web::security::RateLimiter;
use std::sync::Arc;
use undangan::config::Config;
use undangan::services::auth::AdminGate;
use undangan::storage::ObjectStore;

#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::PgPool,
    pub gate: Arc<AdminGate>,
    pub store: Arc<dyn ObjectStore>,
    pub config: Arc<Config>,
    pub rate_limiter: Arc<RateLimiter>,
}
