//! Error types for the UKO client
//!
//! This module defines the error taxonomy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::types::RawResponse;
use reqwest::StatusCode;
use thiserror::Error;

/// The main error type for the UKO client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport and Server Errors (retryable)
    // ============================================================================
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server error: HTTP {status}")]
    ServerError {
        status: u16,
        response: Box<RawResponse>,
    },

    #[error("Rate limited: HTTP 429")]
    RateLimited {
        retry_after_seconds: Option<u64>,
        response: Box<RawResponse>,
    },

    // ============================================================================
    // Client Errors (not retried)
    // ============================================================================
    #[error("Client error: HTTP {status}")]
    ClientError {
        status: u16,
        response: Box<RawResponse>,
    },

    #[error("Failed to process response: {message}")]
    ResponseProcessing {
        message: String,
        response: Box<RawResponse>,
    },

    #[error("Deadline exceeded after {attempts} attempt(s)")]
    DeadlineExceeded { attempts: u32 },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Malformed cursor '{value}' in next link '{href}'")]
    MalformedCursor { href: String, value: String },

    #[error("Pager is exhausted, no more pages to fetch")]
    PagerExhausted,

    // ============================================================================
    // Local Validation Errors
    // ============================================================================
    #[error("Invalid options for '{field}': {message}")]
    InvalidOptions { field: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Create an invalid options error
    pub fn invalid_options(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a response processing error that keeps the raw response
    pub fn response_processing(message: impl Into<String>, response: RawResponse) -> Self {
        Self::ResponseProcessing {
            message: message.into(),
            response: Box::new(response),
        }
    }

    /// Create a malformed cursor error
    pub fn malformed_cursor(href: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedCursor {
            href: href.into(),
            value: value.into(),
        }
    }

    /// Classify a non-success response into the matching error kind
    pub fn from_status(response: RawResponse) -> Self {
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_seconds = response
                .header("retry-after")
                .and_then(|s| s.trim().parse().ok());
            Self::RateLimited {
                retry_after_seconds,
                response: Box::new(response),
            }
        } else if status.is_server_error() {
            Self::ServerError {
                status: status.as_u16(),
                response: Box::new(response),
            }
        } else {
            Self::ClientError {
                status: status.as_u16(),
                response: Box::new(response),
            }
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(e) => !e.is_builder(),
            Error::ServerError { .. } | Error::RateLimited { .. } => true,
            _ => false,
        }
    }

    /// HTTP status code, when a response was received
    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.status().as_u16())
    }

    /// Raw response, when one was received before the error
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Error::ServerError { response, .. }
            | Error::RateLimited { response, .. }
            | Error::ClientError { response, .. }
            | Error::ResponseProcessing { response, .. } => Some(response),
            _ => None,
        }
    }
}

/// Result type alias for the UKO client
pub type Result<T> = std::result::Result<T, Error>;
