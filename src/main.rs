use anyhow::Context;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use campus_api::auth::JwtKeys;
use campus_api::config::{self, StorageBackend};
use campus_api::database::DatabaseManager;
use campus_api::{app, is_development, AppState, Storage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so DATABASE_URL, JWT_SECRET, etc. are picked up locally
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,campus_api=debug")),
        )
        .init();

    let config = config::config().clone();
    info!("Starting Campus API in {:?} mode", config.environment);
    if is_development!() {
        info!("Development mode: using built-in JWT secret unless JWT_SECRET is set");
    }

    let jwt = JwtKeys::from_config(&config.security).context("invalid JWT configuration")?;

    let storage = match config.storage {
        StorageBackend::Postgres => {
            let pool = DatabaseManager::connect(&config.database)
                .await
                .context("failed to connect to database")?;
            if config.database.run_migrations {
                DatabaseManager::migrate(&pool).await.context("failed to run migrations")?;
            }
            Storage::Postgres(pool)
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage; records are lost on restart");
            Storage::Memory
        }
    };

    let bind_addr = config.bind_addr();
    let router = app(AppState::new(config, storage, jwt));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!("Campus API listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
