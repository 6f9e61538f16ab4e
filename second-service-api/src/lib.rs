//! # SecondService Data API
//!
//! Protobuf contract for SecondService's gRPC surface: one unary method,
//! `DataService/GetBasicData`, taking a caller state tag and returning the
//! service status line. Both the client and the server stubs are generated
//! here so that callers and the service implementation share one crate.

pub mod pb {
    include!(concat!(env!("OUT_DIR"), "/second_service.rs"));
}

pub use pb::data_service_client::DataServiceClient;
pub use pb::data_service_server::{DataService, DataServiceServer};
pub use pb::{BasicRequest, BasicResponse};
