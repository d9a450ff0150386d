//! Dashboard server entrypoint.

use acme_dashboard::{app, ensure_tables, AppConfig, AppState, PgStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("acme_dashboard=info")),
        )
        .init();

    let config = AppConfig::from_env();

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    ensure_tables(&pool).await?;

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(Arc::new(PgStore::new(pool)), config);

    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
