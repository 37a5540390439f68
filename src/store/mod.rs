pub mod json_file;
pub mod user;

pub use json_file::JsonFileStore;
pub use user::User;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading or saving the user collection
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize users: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Whole-collection persistence for users.
///
/// Every call goes to the backing storage; nothing is cached between calls and
/// concurrent writers are not serialized against each other.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn load_all(&self) -> Result<Vec<User>, StoreError>;

    async fn save_all(&self, users: &[User]) -> Result<(), StoreError>;
}
