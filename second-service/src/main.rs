use anyhow::Context;
use clap::Parser;
use second_service::config::Config;
use second_service::grpc::DataServiceGrpc;
use second_service::http;
use second_service::status::StatusService;
use second_service_api::DataServiceServer;
use tonic::transport::Server;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    let status = StatusService::new(config.name.clone());

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", config.listen))?;
    info!(addr = %config.listen, "HTTP listening");

    let http = axum::serve(listener, http::app(status.clone()));

    info!(addr = %config.grpc_listen, "gRPC listening");
    let grpc = Server::builder()
        .add_service(DataServiceServer::new(DataServiceGrpc::new(status)))
        .serve(config.grpc_listen);

    tokio::try_join!(
        async { http.await.context("HTTP server failed") },
        async { grpc.await.context("gRPC server failed") },
    )?;

    Ok(())
}
