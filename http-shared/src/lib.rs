//! # Http Shared
//!
//! Shared plumbing for service-to-service REST calls.
//!
//! ## Key components
//!
//! * **[`ClientBase`]:** the generic client that builds and sends requests
//!   against a fixed base address, validates responses, and wraps every
//!   failure into [`ClientError`] with full diagnostic context.
//! * **[`JsonSerializer`]:** JSON (de)serialization under one of two fixed
//!   naming profiles (camelCase by default, PascalCase on request), omitting
//!   null fields on the way out.
//! * **[`Request`] / [`RequestPair`]:** generic wrappers that give outgoing
//!   payloads a name-stable shape.
//!
//! Service-specific clients compose [`ClientBase`] and expose one method per
//! remote operation; no protocol logic lives outside this crate.

pub mod client;
pub mod json;

pub use client::{ClientBase, ClientError, Request, RequestPair};
pub use json::{DeserializeError, JsonSerializer, NamingProfile};
