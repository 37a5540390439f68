use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use users_api::config::AppConfig;
use users_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    info!("Starting users API in {:?} mode", config.environment);
    info!("Users file: {}", config.server.users_file.display());
    if config.security.jwt_secret.is_empty() {
        warn!("JWT_SECRET is not set; every bearer token will be rejected");
    }

    let port = config.server.port;
    let state = AppState::from_config(config).context("failed to set up database pool")?;

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Server listening on http://{}", bind_addr);
    axum::serve(listener, app(state)).await.context("server error")?;

    Ok(())
}
