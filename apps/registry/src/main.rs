mod config;
mod docs;
mod features;

use anyhow::Context;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::DbConfig;
use features::veterinarians::repo::PgVeterinarianRepository;
use features::veterinarians::service::VeterinarianService;

#[derive(Clone)]
pub struct AppState {
    pub veterinarians: VeterinarianService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let db_config = DbConfig::from_env().context("failed to load database config")?;
    info!(?db_config, "connecting to database");

    let db = db_config
        .pool_options()
        .connect_with(db_config.connect_options())
        .await
        .context("failed to connect to database")?;

    let repo = PgVeterinarianRepository::new(db.clone());
    repo.ensure_schema()
        .await
        .context("failed to create veterinarian schema")?;

    let state = AppState {
        veterinarians: VeterinarianService::new(Arc::new(repo)),
    };

    let app = features::router(state);
    let bind = config::bind_addr(|name| std::env::var(name).ok());
    info!(%bind, "registry listening");
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("database pool closed");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => warn!("received SIGINT, shutting down"),
        Err(err) => warn!(?err, "failed to listen for SIGINT"),
    }
}
