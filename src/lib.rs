// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # UKO Client
//!
//! Async Rust client for the Unified Key Orchestrator REST API (`/api/v4`).
//!
//! ## Features
//!
//! - **Pagination**: offset-cursor pagers with `has_next` / `get_next` / `get_all`
//! - **Deadlines**: one absolute deadline bounds every attempt and retry wait
//! - **Retries**: opt-in bounded retries on transport errors, 429 and 5xx
//! - **Raw responses**: status and headers available even when decoding fails
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use uko_client::{ClientConfig, Deadline, ListManagedKeysOptions, UkoClient};
//!
//! #[tokio::main]
//! async fn main() -> uko_client::Result<()> {
//!     let config = ClientConfig::builder()
//!         .base_url("https://uko.example.com")
//!         .bearer_token("...")
//!         .build();
//!     let client = UkoClient::new(config)?;
//!     client.enable_retries(3, Duration::from_millis(500));
//!
//!     let options = ListManagedKeysOptions::new().states(["active"]).limit(100);
//!     let mut pager = client.managed_keys_pager(options)?;
//!     let keys = pager.get_all(Deadline::after(Duration::from_secs(30))).await?;
//!     println!("{} active keys", keys.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           UkoClient                             │
//! │  *_pager(options) → Pager      get_*/delete_*(id) → ApiResponse │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴───────────┬──────────────────────┐
//! │  Resources   │        Pagination         │        HTTP          │
//! ├──────────────┼───────────────────────────┼──────────────────────┤
//! │ Models       │ Pager state machine       │ Path templates       │
//! │ Options      │ PageSource / PageFetcher  │ Deadline             │
//! │ ListResource │ Offset cursor extraction  │ Retry + backoff      │
//! │              │                           │ Rate limit           │
//! └──────────────┴───────────────────────────┴──────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration and retry policy
pub mod config;

/// HTTP invoker with deadline, retry and rate limiting
pub mod http;

/// Offset-cursor pagination
pub mod pagination;

/// UKO resource models, list options and adapters
pub mod resources;

/// Client entry point
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{
    AssociatedResourcePager, KeyTemplatePager, KeyVersionPager, KeystorePager, ManagedKeyPager,
    UkoClient, VaultPager,
};
pub use config::{ClientConfig, ClientConfigBuilder, RetryPolicy};
pub use error::{Error, Result};
pub use pagination::{extract_offset, ListOptions, Page, PageSource, Pager, PagerState};
pub use resources::*;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
