//! HTTP module
//!
//! The request invoker every endpoint call is built on.
//!
//! # Features
//!
//! - **Deadlines**: one absolute deadline bounds every attempt and every wait
//! - **Automatic Retries**: transport errors, 429 and 5xx, switched on and off
//!   at runtime through [`ClientConfig`](crate::ClientConfig)
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **Rate Limiting**: optional token bucket rate limiter using governor

mod client;
mod rate_limit;

pub use client::{HttpClient, Request};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
