//! Bow Studio server binary.
//!
//! Loads configuration, connects to PostgreSQL, applies migrations and
//! serves the HTTP API until interrupted.

use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use bow_studio::adapters::http::{build_router, Repositories};
use bow_studio::adapters::{
    PostgresBowRepository, PostgresRecipeRepository, PostgresRibbonRepository,
    PostgresSaleRepository, MIGRATOR,
};
use bow_studio::config::{AppConfig, LogFormat, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);
    tracing::info!(
        environment = ?config.server.environment,
        "starting bow studio"
    );

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to connect to database");
            e
        })?;
    tracing::info!("database connection established");

    if config.database.run_migrations {
        MIGRATOR.run(&pool).await?;
        tracing::info!("migrations applied");
    }

    let repos = Repositories {
        ribbons: Arc::new(PostgresRibbonRepository::new(pool.clone())),
        bows: Arc::new(PostgresBowRepository::new(pool.clone())),
        recipes: Arc::new(PostgresRecipeRepository::new(pool.clone())),
        sales: Arc::new(PostgresSaleRepository::new(pool)),
    };
    let app = build_router(&repos, &config);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    match server.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
