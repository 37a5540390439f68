use sqlx::PgPool;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::{self, DatabaseError};
use crate::store::{JsonFileStore, UserStore};

/// Process-wide resources, created once at startup and handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn UserStore>,
    pub db: Option<PgPool>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn UserStore>, db: Option<PgPool>) -> Self {
        Self {
            config: Arc::new(config),
            store,
            db,
        }
    }

    /// File store at the configured path plus a lazily connected pool
    pub fn from_config(config: AppConfig) -> Result<Self, DatabaseError> {
        let store = Arc::new(JsonFileStore::new(config.server.users_file.clone()));
        let db = database::connect(&config.database)?;
        Ok(Self::new(config, store, db))
    }
}
