//! # Charge Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the id source and email collaborator adapters
//! - Create the charge and order services
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charge_hex::{
    ChargeService, OrderService, RandomIdSource, inbound::HttpServer, outbound::EmailClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,charge_app=debug,charge_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting charge server on port {}", config.port);
    tracing::info!("Using email service: {}", config.email_service_url);

    // Wire the adapters into the service layer
    let charges = ChargeService::new(RandomIdSource);
    let confirmations = EmailClient::new(&config.email_service_url);
    let service = OrderService::new(charges, confirmations);

    // Create and run the HTTP server
    let server = HttpServer::with_rate_limit(service, config.rate_limit_per_minute);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
