use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_recommender::{
    assets::AssetStore,
    config::Config,
    routes::{create_app, AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_recommender=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Assets must be complete before the listener exists
    let matrix_path = config.similarity_matrix_path.clone();
    let metadata_path = config.metadata_path.clone();
    let assets = tokio::task::spawn_blocking(move || AssetStore::load(&matrix_path, &metadata_path))
        .await
        .context("Asset loading task failed")?
        .inspect_err(|e| tracing::error!(error = %e, "Fatal error: failed to load assets"))
        .context("Failed to load assets")?;

    let app = create_app(AppState::new(assets), &config);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!(address = %address, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
