mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use email_writer_cors::middleware::{SharedCors, cors_middleware};
use email_writer_cors::{CorsConfig, CorsRegistry};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Rule table is fixed for the process lifetime; bad origins abort here.
    let config = CorsConfig::from_env()?;
    let cors: SharedCors = Arc::new(CorsRegistry::from_config(config)?);

    let app = Router::new()
        .route("/health", get(routes::health))
        .route("/api/email/generate", post(routes::generate))
        .layer(axum::middleware::from_fn_with_state(cors, cors_middleware));

    let addr: SocketAddr = "127.0.0.1:8080".parse()?;
    info!(%addr, "email-writer CORS demo listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
