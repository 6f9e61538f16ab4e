//! # SecondService
//!
//! Answers status queries over two channels: plain-text REST (`GET /`) and
//! the `DataService/GetBasicData` unary RPC. Both delegate to one
//! [`status::StatusService`], which formats a line from the configured
//! display name, the host identity, and the process start time.

pub mod config;
pub mod grpc;
pub mod http;
pub mod status;
