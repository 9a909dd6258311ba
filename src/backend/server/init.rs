/**
 * Server Initialization
 *
 * Builds the Axum application from configuration:
 * 1. Connect to PostgreSQL and run migrations
 * 2. Wrap the pool in a `PgStore`
 * 3. Create app state and the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, StartupError};
use crate::backend::server::state::AppState;
use crate::backend::store::PgStore;
use crate::shared::AppConfig;

/// Create and configure the Axum application
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing inkpost backend server");

    let pool = load_database(&config.database_url).await?;
    let state = AppState::from_config(Arc::new(PgStore::new(pool)), config);

    if config.token_ttl.is_none() {
        tracing::warn!("JWT_TTL_SECS not set; issued tokens will not expire");
    }

    let app = create_router(state);
    tracing::info!("Router configured");

    Ok(app)
}
