//! Client configuration
//!
//! [`ClientConfig`] carries everything the request invoker needs: base URL,
//! per-attempt timeout, default headers, optional client-side rate limiting
//! and the retry policy. The retry policy is the only piece that can change
//! after construction, through [`ClientConfig::enable_retries`] and
//! [`ClientConfig::disable_retries`].

use crate::http::RateLimiterConfig;
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

/// Default base URL path prefix of the UKO API
pub const API_PATH_PREFIX: &str = "/api/v4";

// ============================================================================
// Retry Policy
// ============================================================================

/// Retry settings applied to every invocation of a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Whether retries are attempted at all
    #[serde(default)]
    pub enabled: bool,
    /// Maximum number of retries after the first attempt
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base delay between attempts
    #[serde(default = "default_backoff_interval")]
    pub backoff_interval: Duration,
    /// Upper bound on any single delay
    #[serde(default = "default_max_backoff")]
    pub max_backoff: Duration,
    /// How the delay grows with each attempt
    #[serde(default)]
    pub backoff_type: BackoffType,
}

fn default_max_retries() -> u32 {
    4
}

fn default_backoff_interval() -> Duration {
    Duration::from_secs(1)
}

fn default_max_backoff() -> Duration {
    Duration::from_secs(30)
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            max_retries: default_max_retries(),
            backoff_interval: default_backoff_interval(),
            max_backoff: default_max_backoff(),
            backoff_type: BackoffType::default(),
        }
    }
}

impl RetryPolicy {
    /// Policy with retries turned off
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Policy with `max_retries` retries starting at `backoff_interval`
    pub fn enabled(max_retries: u32, backoff_interval: Duration) -> Self {
        Self {
            enabled: true,
            max_retries,
            backoff_interval,
            ..Self::default()
        }
    }

    /// Retries allowed by this policy (zero when disabled)
    pub fn effective_retries(&self) -> u32 {
        if self.enabled {
            self.max_retries
        } else {
            0
        }
    }

    /// Calculate backoff delay for a given attempt (0-based)
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let delay = match self.backoff_type {
            BackoffType::Constant => self.backoff_interval,
            BackoffType::Linear => self.backoff_interval.saturating_mul(attempt + 1),
            BackoffType::Exponential => {
                let factor = 2u32.saturating_pow(attempt);
                self.backoff_interval.saturating_mul(factor)
            }
        };

        std::cmp::min(delay, self.max_backoff)
    }
}

// ============================================================================
// Client Config
// ============================================================================

/// Configuration for a [`UkoClient`](crate::UkoClient)
#[derive(Debug)]
pub struct ClientConfig {
    /// Service URL, e.g. `https://uko.example.com`
    pub base_url: String,
    /// Timeout applied to each individual attempt
    pub timeout: Duration,
    /// Default headers for all requests (e.g. `Authorization`)
    pub default_headers: HashMap<String, String>,
    /// Client-side rate limiter, off by default
    pub rate_limit: Option<RateLimiterConfig>,
    /// User agent string
    pub user_agent: String,
    retry: RwLock<RetryPolicy>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: Duration::from_secs(60),
            default_headers: HashMap::new(),
            rate_limit: None,
            user_agent: format!("uko-client/{}", env!("CARGO_PKG_VERSION")),
            retry: RwLock::new(RetryPolicy::default()),
        }
    }
}

impl Clone for ClientConfig {
    /// The clone gets its own retry policy, seeded with the current one
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            timeout: self.timeout,
            default_headers: self.default_headers.clone(),
            rate_limit: self.rate_limit.clone(),
            user_agent: self.user_agent.clone(),
            retry: RwLock::new(self.retry_policy()),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Turn automatic retries on for every subsequent invocation
    pub fn enable_retries(&self, max_retries: u32, backoff_interval: Duration) {
        let mut policy = self.retry.write().unwrap_or_else(PoisonError::into_inner);
        policy.enabled = true;
        policy.max_retries = max_retries;
        policy.backoff_interval = backoff_interval;
    }

    /// Turn automatic retries off; retry loops already running are unaffected
    pub fn disable_retries(&self) {
        self.retry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .enabled = false;
    }

    /// Replace the whole retry policy
    pub fn set_retry_policy(&self, policy: RetryPolicy) {
        *self.retry.write().unwrap_or_else(PoisonError::into_inner) = policy;
    }

    /// Snapshot of the current retry policy
    pub fn retry_policy(&self) -> RetryPolicy {
        *self.retry.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether retries are currently enabled
    pub fn retries_enabled(&self) -> bool {
        self.retry_policy().enabled
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the service URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the per-attempt timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Send `Authorization: Bearer <token>` with every request
    pub fn bearer_token(self, token: impl AsRef<str>) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        self.header("Authorization", value)
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the initial retry policy
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.config.retry = RwLock::new(policy);
        self
    }

    /// Set backoff growth and cap, keeping the rest of the retry policy
    pub fn backoff(mut self, backoff_type: BackoffType, max_backoff: Duration) -> Self {
        let policy = self
            .config
            .retry
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        policy.backoff_type = backoff_type;
        policy.max_backoff = max_backoff;
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.rate_limit.is_none());
        assert!(!config.retries_enabled());
        assert!(config.user_agent.starts_with("uko-client/"));
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::builder()
            .base_url("https://uko.example.com")
            .timeout(Duration::from_secs(5))
            .bearer_token("abc")
            .header("X-Correlation-Id", "42")
            .rate_limit(RateLimiterConfig::new(5, 5))
            .backoff(BackoffType::Linear, Duration::from_secs(3))
            .user_agent("test-agent/1.0")
            .build();

        assert_eq!(config.base_url, "https://uko.example.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.default_headers.get("Authorization"),
            Some(&"Bearer abc".to_string())
        );
        assert_eq!(
            config.default_headers.get("X-Correlation-Id"),
            Some(&"42".to_string())
        );
        assert!(config.rate_limit.is_some());
        assert_eq!(config.retry_policy().backoff_type, BackoffType::Linear);
        assert_eq!(config.retry_policy().max_backoff, Duration::from_secs(3));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[test]
    fn test_enable_disable_retries() {
        let config = ClientConfig::default();

        config.enable_retries(3, Duration::from_millis(250));
        let policy = config.retry_policy();
        assert!(policy.enabled);
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.backoff_interval, Duration::from_millis(250));
        assert_eq!(policy.effective_retries(), 3);

        // idempotent
        config.enable_retries(3, Duration::from_millis(250));
        assert_eq!(config.retry_policy(), policy);

        config.disable_retries();
        config.disable_retries();
        assert!(!config.retries_enabled());
        assert_eq!(config.retry_policy().effective_retries(), 0);
    }

    #[test]
    fn test_cloned_config_has_independent_retry_policy() {
        let first = ClientConfig::default();
        first.enable_retries(2, Duration::from_millis(10));

        let second = first.clone();
        assert!(second.retries_enabled());

        second.disable_retries();
        assert!(first.retries_enabled());
        assert!(!second.retries_enabled());
    }

    #[test]
    fn test_calculate_backoff_constant() {
        let policy = RetryPolicy {
            backoff_type: BackoffType::Constant,
            ..RetryPolicy::enabled(5, Duration::from_millis(100))
        };
        assert_eq!(policy.calculate_backoff(0), Duration::from_millis(100));
        assert_eq!(policy.calculate_backoff(1), Duration::from_millis(100));
        assert_eq!(policy.calculate_backoff(5), Duration::from_millis(100));
    }

    #[test]
    fn test_calculate_backoff_linear() {
        let policy = RetryPolicy {
            backoff_type: BackoffType::Linear,
            ..RetryPolicy::enabled(5, Duration::from_millis(100))
        };
        assert_eq!(policy.calculate_backoff(0), Duration::from_millis(100));
        assert_eq!(policy.calculate_backoff(1), Duration::from_millis(200));
        assert_eq!(policy.calculate_backoff(2), Duration::from_millis(300));
    }

    #[test]
    fn test_calculate_backoff_exponential_respects_max() {
        let policy = RetryPolicy {
            max_backoff: Duration::from_millis(500),
            ..RetryPolicy::enabled(5, Duration::from_millis(100))
        };
        assert_eq!(policy.calculate_backoff(0), Duration::from_millis(100));
        assert_eq!(policy.calculate_backoff(1), Duration::from_millis(200));
        assert_eq!(policy.calculate_backoff(2), Duration::from_millis(400));
        assert_eq!(policy.calculate_backoff(3), Duration::from_millis(500));
        assert_eq!(policy.calculate_backoff(40), Duration::from_millis(500));
    }

    #[test]
    fn test_retry_policy_deserialize_defaults() {
        let policy: RetryPolicy = serde_json::from_str(r#"{"enabled": true}"#).unwrap();
        assert!(policy.enabled);
        assert_eq!(policy.max_retries, 4);
        assert_eq!(policy.max_backoff, Duration::from_secs(30));
        assert_eq!(policy.backoff_type, BackoffType::Exponential);
    }
}
