//! # Cotacao Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the upstream fetcher and the SQLite store
//! - Create the quote service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cotacao_hex::{QuoteService, inbound::HttpServer};
use cotacao_repo::SqliteQuoteStore;
use cotacao_upstream::AwesomeApiSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cotacao_app=debug,cotacao_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting cotacao server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url);
    tracing::info!("Upstream endpoint: {}", config.upstream_url);

    // Build the adapters
    let source = AwesomeApiSource::new(&config.upstream_url);
    let store = SqliteQuoteStore::new(&config.database_url);

    // Create the quote service
    let service = QuoteService::new(source, store);

    // Create and run the HTTP server. A bind failure (port in use) is fatal.
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    if let Err(err) = server.run(&addr).await {
        tracing::error!(error = %err, "server failed");
        return Err(err);
    }

    Ok(())
}
