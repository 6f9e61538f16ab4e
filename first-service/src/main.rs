use anyhow::Context;
use clap::Parser;
use first_service::config::Config;
use first_service::http::{self, AppState};
use first_service::identity::Identity;
use second_service_contracts::{SecondServiceClient, SecondServiceGrpcClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();

    let state = AppState {
        identity: Identity::new(config.name.clone()),
        second: SecondServiceClient::new(reqwest::Client::new(), config.second_service.clone()),
        second_grpc: SecondServiceGrpcClient::new(&config.second_service_grpc)
            .context("invalid SecondService gRPC address")?,
    };

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", config.listen))?;
    info!(addr = %config.listen, "HTTP listening");

    axum::serve(listener, http::app(state))
        .await
        .context("HTTP server failed")?;

    Ok(())
}
