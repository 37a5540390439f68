use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from the database-backed user routes
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Unknown role value: {0}")]
    InvalidRole(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Build the shared pool once at startup.
///
/// Connections are opened lazily, so the server starts even when the database
/// is down; failures surface on the first query instead. Returns `None` when no
/// connection string is configured.
pub fn connect(config: &DatabaseConfig) -> Result<Option<PgPool>, DatabaseError> {
    let Some(url) = config.url.as_deref() else {
        info!("DATABASE_URL not set; database routes disabled");
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy(url)?;

    info!("Created database pool (max {} connections)", config.max_connections);
    Ok(Some(pool))
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
