//! # Typed HTTP client base
//!
//! [`ClientBase`] owns the protocol mechanics of a REST call (building the
//! request URL, sending, validating the response, decoding the body) so that
//! service-specific clients only declare an endpoint and the types involved.
//!
//! ## Response validation
//!
//! A call succeeds exactly when the server answers HTTP 200 *and* the body
//! can be read. Every other outcome, including other 2xx codes, surfaces as
//! a [`ClientError`] whose message carries the numeric and textual status
//! code, the absolute URL attempted, the `trace-id` response header (or the
//! literal "null"), and the raw body (or "No content"). Gathering those
//! diagnostics is best-effort and never fails itself.
//!
//! ## Cancellation & concurrency
//!
//! Dropping a call future aborts the in-flight send. The client holds no
//! per-call state, so one instance can serve any number of concurrent
//! callers.

use crate::json::{JsonSerializer, NamingProfile};
use reqwest::header::{
    CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, InvalidHeaderName, InvalidHeaderValue,
};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// Represents failures of an outbound REST call, from transport errors to
/// payload decoding.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS
    /// failure, aborted send).
    #[error("failed to send {method} request to '{url}'")]
    Send {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with anything other than HTTP 200 plus a
    /// readable body.
    #[error("unexpected response from '{url}'\n{diagnostic}")]
    UnexpectedResponse { url: String, diagnostic: String },

    /// The request body could not be serialized to JSON.
    #[error("failed to serialize request body for '{url}'")]
    SerializeBody {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A caller-supplied header name was not a valid HTTP header name.
    #[error("invalid header name '{name}'")]
    InvalidHeaderName {
        name: String,
        #[source]
        source: InvalidHeaderName,
    },

    /// A caller-supplied header value was not a valid HTTP header value.
    #[error("invalid value for header '{name}'")]
    InvalidHeaderValue {
        name: String,
        #[source]
        source: InvalidHeaderValue,
    },

    /// A 200 response whose body did not parse into the expected type.
    /// The offending payload is part of the message.
    #[error("failed to deserialize response from '{url}' into {target}\n{body}")]
    Deserialize {
        url: String,
        target: &'static str,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Gives an outgoing payload a name-stable single-field shape before
/// serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request<T> {
    pub data: T,
}

impl<T> Request<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Two-argument counterpart of [`Request`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPair<T0, T1> {
    pub arg0: T0,
    pub arg1: T1,
}

impl<T0, T1> RequestPair<T0, T1> {
    pub fn new(arg0: T0, arg1: T1) -> Self {
        Self { arg0, arg1 }
    }
}

/// Generic base for REST clients bound to one remote service.
///
/// Service-specific clients compose a `ClientBase` and expose one method per
/// remote operation, delegating to [`get`](Self::get) and the `post`
/// variants.
#[derive(Debug, Clone)]
pub struct ClientBase {
    http: reqwest::Client,
    base_url: Url,
    json: JsonSerializer,
}

impl ClientBase {
    /// Creates a client with the default (camelCase) serialization profile.
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self::with_profile(http, base_url, NamingProfile::default())
    }

    /// Creates a client with an explicit serialization profile. The profile
    /// is fixed for the lifetime of the client.
    pub fn with_profile(http: reqwest::Client, base_url: Url, profile: NamingProfile) -> Self {
        Self {
            http,
            base_url,
            json: JsonSerializer::new(profile),
        }
    }

    /// Issues a GET and decodes the 200 body into `T`.
    ///
    /// A `String` target receives the raw body unchanged, so plain-text
    /// endpoints need no JSON quoting.
    pub async fn get<T>(&self, endpoint: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned + 'static,
    {
        let url = self.url(endpoint);
        debug!(url = %url, "GET request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Send {
                method: Method::GET,
                url: url.clone(),
                source,
            })?;
        let body = expect_ok(response, &url).await?;

        self.decode(body, url)
    }

    /// Issues a GET and returns the raw 200 body.
    pub async fn get_text(&self, endpoint: &str) -> Result<String, ClientError> {
        self.get(endpoint).await
    }

    /// Serializes `body`, POSTs it, validates the response, and discards the
    /// response body.
    pub async fn post<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<(), ClientError> {
        let url = self.url(endpoint);
        debug!(url = %url, "POST request");

        let response = self
            .send_post(&url, body, None)
            .await?;
        expect_ok(response, &url).await?;

        Ok(())
    }

    /// As [`post`](Self::post), but also decodes a typed response body.
    pub async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize,
        T: DeserializeOwned + 'static,
    {
        self.post_json_with_headers(endpoint, body, &[]).await
    }

    /// As [`post_json`](Self::post_json), with extra request headers.
    pub async fn post_json_with_headers<B, T>(
        &self,
        endpoint: &str,
        body: &B,
        headers: &[(String, String)],
    ) -> Result<T, ClientError>
    where
        B: Serialize,
        T: DeserializeOwned + 'static,
    {
        let url = self.url(endpoint);
        debug!(url = %url, "POST request");

        let response = self.send_post(&url, body, Some(headers)).await?;
        let body = expect_ok(response, &url).await?;

        self.decode(body, url)
    }

    async fn send_post<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        headers: Option<&[(String, String)]>,
    ) -> Result<reqwest::Response, ClientError> {
        let payload = self
            .json
            .serialize(body)
            .map_err(|source| ClientError::SerializeBody {
                url: url.to_owned(),
                source,
            })?;

        let mut request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body(payload);
        if let Some(headers) = headers {
            request = request.headers(header_map(headers)?);
        }

        request.send().await.map_err(|source| ClientError::Send {
            method: Method::POST,
            url: url.to_owned(),
            source,
        })
    }

    fn decode<T>(&self, body: String, url: String) -> Result<T, ClientError>
    where
        T: DeserializeOwned + 'static,
    {
        self.json
            .deserialize(&body)
            .map_err(|err| ClientError::Deserialize {
                url,
                target: err.target,
                body: err.json,
                source: err.source,
            })
    }

    fn url(&self, endpoint: &str) -> String {
        join_url(self.base_url.as_str(), endpoint)
    }
}

/// Joins a base address and an endpoint with exactly one `/` separator,
/// whatever combination of trailing and leading slashes the two carry.
fn join_url(base: &str, endpoint: &str) -> String {
    let base = base.trim_end_matches('/');
    let endpoint = endpoint.trim_start_matches('/');
    format!("{base}/{endpoint}")
}

/// Returns the body of a 200 response, or the full response diagnostic as an
/// error for anything else.
async fn expect_ok(response: reqwest::Response, url: &str) -> Result<String, ClientError> {
    let status = response.status();
    let trace = trace_id(response.headers());
    let body = response.text().await.ok();

    if status == StatusCode::OK {
        if let Some(body) = body {
            return Ok(body);
        }
    }

    Err(ClientError::UnexpectedResponse {
        url: url.to_owned(),
        diagnostic: diagnostic(status, url, trace.as_deref(), body.as_deref()),
    })
}

fn diagnostic(status: StatusCode, url: &str, trace: Option<&str>, body: Option<&str>) -> String {
    format!(
        "{} {}\nFailed for {}\ntrace-id: {}\n\n{}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown"),
        url,
        trace.unwrap_or("null"),
        body.unwrap_or("No content"),
    )
}

/// Best-effort `trace-id` header lookup. Lookup is case-insensitive;
/// unreadable or blank values count as absent.
fn trace_id(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("trace-id")?.to_str().ok()?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, ClientError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|source| {
            ClientError::InvalidHeaderName {
                name: name.clone(),
                source,
            }
        })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|source| ClientError::InvalidHeaderValue {
                name: name.clone(),
                source,
            })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalizes_separators() {
        assert_eq!(
            join_url("https://host/api/", "/status"),
            "https://host/api/status"
        );
        assert_eq!(
            join_url("https://host/api", "status"),
            "https://host/api/status"
        );
        assert_eq!(
            join_url("https://host/api/", "status"),
            "https://host/api/status"
        );
        assert_eq!(
            join_url("https://host/api", "/status"),
            "https://host/api/status"
        );
    }

    #[test]
    fn join_url_with_empty_endpoint_keeps_single_trailing_slash() {
        assert_eq!(join_url("https://host:5200", ""), "https://host:5200/");
        assert_eq!(join_url("https://host:5200/", ""), "https://host:5200/");
    }

    #[test]
    fn diagnostic_contains_status_url_trace_and_body() {
        let message = diagnostic(
            StatusCode::NOT_FOUND,
            "https://host/api/status",
            Some("abc-123"),
            Some("missing"),
        );
        assert_eq!(
            message,
            "404 Not Found\nFailed for https://host/api/status\ntrace-id: abc-123\n\nmissing"
        );
    }

    #[test]
    fn diagnostic_degrades_to_placeholders() {
        let message = diagnostic(StatusCode::BAD_GATEWAY, "https://host/", None, None);
        assert!(message.contains("502 Bad Gateway"));
        assert!(message.contains("trace-id: null"));
        assert!(message.contains("No content"));
    }

    #[test]
    fn trace_id_ignores_blank_values() {
        let mut headers = HeaderMap::new();
        headers.insert("trace-id", HeaderValue::from_static("  "));
        assert_eq!(trace_id(&headers), None);

        headers.insert("trace-id", HeaderValue::from_static("abc"));
        assert_eq!(trace_id(&headers), Some("abc".to_string()));
    }

    #[test]
    fn header_map_rejects_invalid_names() {
        let err = header_map(&[("bad header".to_string(), "v".to_string())]).unwrap_err();
        assert!(matches!(err, ClientError::InvalidHeaderName { .. }));
    }
}
