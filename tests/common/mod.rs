#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

use users_api::config::AppConfig;
use users_api::store::JsonFileStore;
use users_api::{app, AppState};

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestServer {
    pub base_url: String,
    pub users_file: PathBuf,
    _dir: TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Current on-disk collection
    pub fn stored_users(&self) -> Result<Value> {
        let text = std::fs::read_to_string(&self.users_file)
            .with_context(|| format!("failed to read {}", self.users_file.display()))?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn stored_text(&self) -> Result<String> {
        Ok(std::fs::read_to_string(&self.users_file)?)
    }
}

/// Server in development mode backed by a fresh file holding `initial`
pub async fn spawn_server(initial: Value) -> Result<TestServer> {
    spawn_with(AppConfig::development(), Some(initial.to_string())).await
}

/// Server whose users file has exactly `contents`, or does not exist for `None`
pub async fn spawn_with(mut config: AppConfig, contents: Option<String>) -> Result<TestServer> {
    let dir = tempfile::tempdir().context("failed to create temp dir")?;
    let users_file = dir.path().join("users.json");
    if let Some(contents) = contents {
        std::fs::write(&users_file, contents)?;
    }

    config.server.users_file = users_file.clone();
    config.security.jwt_secret = TEST_SECRET.to_string();

    let state = AppState::new(config, Arc::new(JsonFileStore::new(users_file.clone())), None);

    // Pick an unused port for isolation
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .context("failed to bind test listener")?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app(state)).await;
    });

    Ok(TestServer {
        base_url: format!("http://127.0.0.1:{}", port),
        users_file,
        _dir: dir,
    })
}
