use clap::Parser;
use std::net::SocketAddr;

/// SecondService configuration, from flags or environment.
#[derive(Debug, Parser)]
#[command(name = "second-service", about = "Status service answering over REST and gRPC")]
pub struct Config {
    /// Display name included in the status line.
    #[arg(long, env = "NAME")]
    pub name: Option<String>,

    /// HTTP listen address.
    #[arg(long, env = "LISTEN", default_value = "0.0.0.0:5200")]
    pub listen: SocketAddr,

    /// gRPC listen address.
    #[arg(long, env = "GRPC_LISTEN", default_value = "0.0.0.0:5201")]
    pub grpc_listen: SocketAddr,
}
