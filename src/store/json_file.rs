use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{StoreError, User, UserStore};

/// Users kept as one pretty-printed JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    async fn load_all(&self) -> Result<Vec<User>, StoreError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        let users: Vec<User> = serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        debug!("Loaded {} users from {}", users.len(), self.path.display());
        Ok(users)
    }

    async fn save_all(&self, users: &[User]) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(users).map_err(StoreError::Serialize)?;

        tokio::fs::write(&self.path, text).await.map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!("Saved {} users to {}", users.len(), self.path.display());
        Ok(())
    }
}
