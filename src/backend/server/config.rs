/**
 * Server Configuration
 *
 * Startup helpers that turn an `AppConfig` into live resources. Unlike the
 * request path, failures here are fatal: the server refuses to start without
 * a reachable database or with an invalid configuration.
 */

use sqlx::PgPool;
use thiserror::Error;

use crate::shared::ConfigError;

/// Errors that stop the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Connect to PostgreSQL and apply bundled migrations
///
/// This function:
/// 1. Creates a PostgreSQL connection pool for `database_url`
/// 2. Runs the migrations in `migrations/`
pub async fn load_database(database_url: &str) -> Result<PgPool, StartupError> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
