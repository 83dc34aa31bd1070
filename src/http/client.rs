//! Request invoker with deadline and bounded retry
//!
//! Provides the HTTP client every endpoint call goes through:
//! - Path template resolution with local validation of required parameters
//! - One absolute deadline covering all attempts and backoff sleeps
//! - Automatic retries on transport errors, 429 and 5xx when enabled
//! - Raw response capture for diagnostics on both success and failure

use super::rate_limit::RateLimiter;
use crate::config::{ClientConfig, API_PATH_PREFIX};
use crate::error::{Error, Result};
use crate::types::{ApiResponse, Deadline, RawResponse};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

static PATH_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{([A-Za-z_][A-Za-z0-9_]*)\}$").expect("valid path param regex"));

/// A fully described request: method, path template, parameters and body
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method
    pub method: Method,
    /// Path template relative to the API root, e.g. `/managed_keys/{id}`
    pub path: String,
    /// Values for `{name}` placeholders in `path`
    pub path_params: HashMap<String, String>,
    /// Query parameters, in order
    pub query: Vec<(String, String)>,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body (JSON)
    pub body: Option<Value>,
}

impl Request {
    /// Create a new request
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            path_params: HashMap::new(),
            query: Vec::new(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Create a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Bind a path placeholder
    #[must_use]
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add several query parameters
    #[must_use]
    pub fn queries(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Resolve the path template into percent-encodable segments.
    ///
    /// Fails with `InvalidOptions` when a placeholder has no value or an
    /// empty one; this never touches the network.
    pub fn path_segments(&self) -> Result<Vec<String>> {
        self.path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match PATH_PARAM.captures(segment) {
                Some(caps) => {
                    let name = &caps[1];
                    match self.path_params.get(name) {
                        Some(value) if !value.trim().is_empty() => Ok(value.clone()),
                        Some(_) => Err(Error::invalid_options(name, "must not be empty")),
                        None => Err(Error::invalid_options(name, "is required")),
                    }
                }
                None => Ok(segment.to_string()),
            })
            .collect()
    }
}

/// HTTP client with deadline-bounded retries
pub struct HttpClient {
    client: Client,
    config: Arc<ClientConfig>,
    base_url: Url,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a client sharing `config` (and its retry policy)
    pub fn new(config: Arc<ClientConfig>) -> Result<Self> {
        let base_url = api_root(&config.base_url)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            base_url,
            rate_limiter,
        })
    }

    /// Shared configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// API root every request path is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Build the full URL for a request
    pub fn build_url(&self, request: &Request) -> Result<Url> {
        if request.path.starts_with("http://") || request.path.starts_with("https://") {
            return Ok(Url::parse(&request.path)?);
        }

        let segments = request.path_segments()?;
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::config("base URL cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request, retrying transient failures while the policy and the
    /// deadline allow it.
    ///
    /// The retry policy is read once per call, so toggling retries affects
    /// later calls only.
    pub async fn invoke(&self, request: &Request, deadline: Deadline) -> Result<RawResponse> {
        let url = self.build_url(request)?;
        let policy = self.config.retry_policy();
        let max_retries = policy.effective_retries();
        let mut attempts: u32 = 0;

        loop {
            if deadline.is_expired() {
                return Err(Error::DeadlineExceeded { attempts });
            }

            if let Some(ref limiter) = self.rate_limiter {
                if !limiter.wait_until(deadline).await {
                    return Err(Error::DeadlineExceeded { attempts });
                }
            }

            let outcome = self.send_once(&url, request, deadline).await;
            attempts += 1;

            let error = match outcome {
                Ok(response) if response.status().is_success() => {
                    debug!(
                        "{} {} -> {} (attempt {})",
                        request.method,
                        url,
                        response.status().as_u16(),
                        attempts
                    );
                    return Ok(response);
                }
                Ok(response) => Error::from_status(response),
                Err(Error::DeadlineExceeded { .. }) => {
                    return Err(Error::DeadlineExceeded { attempts });
                }
                Err(e) => e,
            };

            let retries_used = attempts - 1;
            if !error.is_retryable() || retries_used >= max_retries {
                return Err(error);
            }

            let delay = match &error {
                Error::RateLimited {
                    retry_after_seconds: Some(secs),
                    ..
                } => std::cmp::min(Duration::from_secs(*secs), policy.max_backoff),
                _ => policy.calculate_backoff(retries_used),
            };

            if deadline.would_expire_after(delay) {
                warn!(
                    "{} {} failed ({}), next retry in {:?} would pass the deadline",
                    request.method, url, error, delay
                );
                return Err(Error::DeadlineExceeded { attempts });
            }

            warn!(
                "{} {} failed ({}), attempt {}/{}, retrying in {:?}",
                request.method,
                url,
                error,
                attempts,
                max_retries + 1,
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Send a request and decode its JSON body.
    ///
    /// An empty success body yields `result: None` without error. A body
    /// that does not decode as `T` yields `ResponseProcessing`, which still
    /// carries the raw response.
    pub async fn invoke_json<T: DeserializeOwned>(
        &self,
        request: &Request,
        deadline: Deadline,
    ) -> Result<ApiResponse<T>> {
        let response = self.invoke(request, deadline).await?;
        if response.is_empty() {
            return Ok(ApiResponse {
                result: None,
                response,
            });
        }

        match serde_json::from_slice::<T>(response.body()) {
            Ok(result) => Ok(ApiResponse {
                result: Some(result),
                response,
            }),
            Err(e) => Err(Error::response_processing(
                format!("invalid JSON body: {e}"),
                response,
            )),
        }
    }

    /// One attempt: send, then read the whole body, bounded by the deadline
    async fn send_once(
        &self,
        url: &Url,
        request: &Request,
        deadline: Deadline,
    ) -> Result<RawResponse> {
        let mut req = self.client.request(request.method.clone(), url.clone());

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !request.query.is_empty() {
            req = req.query(&request.query);
        }

        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        let exchange = async move {
            let response = req.send().await?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await?;
            Ok::<_, Error>(RawResponse::new(status, headers, body))
        };

        match deadline.instant() {
            Some(at) => tokio::time::timeout_at(at, exchange)
                .await
                .map_err(|_| Error::DeadlineExceeded { attempts: 0 })?,
            None => exchange.await,
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("retry", &self.config.retry_policy())
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// Normalize the configured service URL into the API root (`.../api/v4`)
fn api_root(base_url: &str) -> Result<Url> {
    if base_url.trim().is_empty() {
        return Err(Error::config("base_url must be set"));
    }

    let trimmed = base_url.trim().trim_end_matches('/');
    let root = if trimmed.ends_with(API_PATH_PREFIX) {
        trimmed.to_string()
    } else {
        format!("{trimmed}{API_PATH_PREFIX}")
    };

    let url =
        Url::parse(&root).map_err(|e| Error::config(format!("invalid base_url '{root}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(Error::config(format!("base_url is not a valid base: {root}")));
    }
    Ok(url)
}
