//! Common types used throughout the UKO client
//!
//! Deadlines, raw HTTP responses and the typed response wrapper returned by
//! every direct call.

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::Instant;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Deadline
// ============================================================================

/// Absolute point in time after which a call fails with
/// [`Error::DeadlineExceeded`](crate::Error::DeadlineExceeded).
///
/// One deadline bounds every attempt and every backoff sleep of a call, so
/// retries can never push a call past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    /// No deadline: the call may block until the transport gives up
    pub fn none() -> Self {
        Self(None)
    }

    /// Deadline `timeout` from now
    pub fn after(timeout: Duration) -> Self {
        Self(Instant::now().checked_add(timeout))
    }

    /// Deadline at a fixed instant
    pub fn at(instant: Instant) -> Self {
        Self(Some(instant))
    }

    /// The instant, if bounded
    pub fn instant(&self) -> Option<Instant> {
        self.0
    }

    /// Whether the deadline has already passed
    pub fn is_expired(&self) -> bool {
        self.0.is_some_and(|at| Instant::now() >= at)
    }

    /// Time left before expiry; `None` when unbounded
    pub fn remaining(&self) -> Option<Duration> {
        self.0
            .map(|at| at.saturating_duration_since(Instant::now()))
    }

    /// Whether sleeping for `delay` would end after the deadline
    pub fn would_expire_after(&self, delay: Duration) -> bool {
        self.remaining().is_some_and(|left| delay >= left)
    }
}

impl From<Duration> for Deadline {
    fn from(timeout: Duration) -> Self {
        Self::after(timeout)
    }
}

// ============================================================================
// Raw Response
// ============================================================================

/// Final HTTP response of a call, kept for diagnostics.
///
/// Returned alongside decoded results and carried inside errors that were
/// produced after a response arrived.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl RawResponse {
    /// Create a raw response from its parts
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body bytes
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// True when the body is empty or whitespace only
    pub fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// Body as lossy UTF-8 text
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Look up a header value as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

// ============================================================================
// Api Response
// ============================================================================

/// Result of a direct call: the decoded body, if any, plus the raw response.
///
/// `result` is `Some` only when the call succeeded and the body was non-empty.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// Decoded body; `None` for an empty success body
    pub result: Option<T>,
    /// Raw HTTP response
    pub response: RawResponse,
}

impl<T> ApiResponse<T> {
    /// HTTP status code of the final response
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Discard the raw response and keep the decoded body
    pub fn into_result(self) -> Option<T> {
        self.result
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_none_never_expires() {
        let deadline = Deadline::none();
        assert!(!deadline.is_expired());
        assert!(deadline.remaining().is_none());
        assert!(!deadline.would_expire_after(Duration::from_secs(3600)));
    }

    #[tokio::test]
    async fn test_deadline_after() {
        let deadline = Deadline::after(Duration::from_secs(60));
        assert!(!deadline.is_expired());
        assert!(deadline.remaining().unwrap() <= Duration::from_secs(60));
        assert!(deadline.would_expire_after(Duration::from_secs(61)));
        assert!(!deadline.would_expire_after(Duration::from_millis(1)));
    }

    #[tokio::test]
    async fn test_deadline_expired() {
        let deadline = Deadline::at(Instant::now());
        assert!(deadline.is_expired());
        assert_eq!(deadline.remaining(), Some(Duration::ZERO));
    }

    #[test]
    fn test_raw_response_empty_body() {
        let raw = RawResponse::new(StatusCode::OK, HeaderMap::new(), Bytes::new());
        assert!(raw.is_empty());

        let raw = RawResponse::new(StatusCode::OK, HeaderMap::new(), Bytes::from_static(b" \n"));
        assert!(raw.is_empty());

        let raw = RawResponse::new(StatusCode::OK, HeaderMap::new(), Bytes::from_static(b"{}"));
        assert!(!raw.is_empty());
        assert_eq!(raw.text(), "{}");
    }

    #[test]
    fn test_backoff_type_serde() {
        let backoff: BackoffType = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(backoff, BackoffType::Linear);
        assert_eq!(BackoffType::default(), BackoffType::Exponential);
    }
}
