//! Caja Chica API Server
//!
//! Main entry point for the petty-cash and inventory service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cajachica_api::{AppState, create_router};
use cajachica_db::connect;
use cajachica_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cajachica=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    info!(environment = %config.environment, "Configuration loaded");

    // Without a URL the server still starts; storage endpoints answer 503.
    let db = connect(&config.database).await?;

    let state = AppState {
        db: db.map(Arc::new),
        environment: config.environment.clone(),
        organization_name: config.organization_name.clone(),
    };

    let app = create_router(state, config.server.body_limit_bytes);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
