use clap::Parser;
use std::net::SocketAddr;
use url::Url;

/// FirstService configuration, from flags or environment.
///
/// Both SecondService addresses are required; startup fails without them.
#[derive(Debug, Parser)]
#[command(
    name = "first-service",
    about = "Front service proxying status calls to SecondService"
)]
pub struct Config {
    /// Display name included in the status line.
    #[arg(long, env = "NAME")]
    pub name: Option<String>,

    /// Base URL of SecondService's REST API.
    #[arg(long, env = "SECOND_SERVICE")]
    pub second_service: Url,

    /// URL of SecondService's gRPC endpoint.
    #[arg(long, env = "SECOND_SERVICE_GRPC")]
    pub second_service_grpc: String,

    /// HTTP listen address.
    #[arg(long, env = "LISTEN", default_value = "0.0.0.0:5100")]
    pub listen: SocketAddr,
}
