//! # SecondService Contracts
//!
//! Thin typed clients for SecondService's two channels:
//!
//! * [`SecondServiceClient`]: REST, composed over
//!   [`http_shared::ClientBase`]; one method per remote operation and no
//!   logic of its own.
//! * [`SecondServiceGrpcClient`]: gRPC, a wrapper over the generated
//!   `DataService` stub on a lazily-connected channel.

pub mod grpc;
pub mod rest;

pub use grpc::{GrpcClientError, SecondServiceGrpcClient};
pub use rest::SecondServiceClient;
