//! # FirstService
//!
//! Front service of the pair. Serves its own status line at `GET /` and
//! proxies SecondService's status over REST (`GET /second`) and gRPC
//! (`GET /secondGrpc`), wrapping each answer in a sentence.

pub mod config;
pub mod http;
pub mod identity;
