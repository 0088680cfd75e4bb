//! AurumBank Backend Server
//!
//! Serves the loan catalog and contact-request API used by the AurumBank
//! Telegram bot and mini-app.

use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

use aurumbank_backend::config::Config;
use aurumbank_backend::db::{self, Database};
use aurumbank_backend::middleware::AdminIdList;
use aurumbank_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!(environment = config.environment.as_str(), "Starting AurumBank API");

    let pool = db::create_pool(&config).await?;
    let database = Database::new(pool);

    let admin_policy = AdminIdList::new(config.admin_ids.iter().copied());
    if admin_policy.is_empty() {
        tracing::warn!("No ADMIN_IDS configured, admin endpoints will reject every caller");
    }

    let app_state = AppState::new(database, Arc::new(admin_policy));

    app_state
        .catalog_service
        .initialize(config.seed_demo_data)
        .await
        .context("Failed to initialize loan catalogs")?;
    app_state
        .contact_store
        .ensure_schema()
        .await
        .context("Failed to initialize contact requests")?;

    let app = aurumbank_backend::build_app(app_state, &config);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid HOST/PORT combination")?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Status probe at http://{}/api/status", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
