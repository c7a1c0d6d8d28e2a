//! Error Handling Module
//!
//! This module defines the error taxonomy for chat calls:
//! - `InvalidConfiguration`: request fields violate documented ranges;
//!   rejected before any network call, never retried
//! - `RateLimited`: the service signalled throttling (HTTP 429); the only
//!   retryable kind
//! - `ThrottledExceeded`: throttled more times than the retry budget permits
//! - `TransportFailure`: any non-throttling transport or protocol error;
//!   surfaced immediately
//!
//! # Example
//!
//! ```rust
//! use charsiu::error::LlmError;
//!
//! let error = LlmError::invalid_configuration("Temperature must be between 0.0 and 2.0");
//! assert!(!error.is_retryable());
//! ```

use std::time::Duration;

use thiserror::Error;

/// The error type for chat calls.
///
/// Variants map one-to-one onto the outcomes a caller has to handle.
/// `RateLimited` is an internal classification consumed by the retry
/// executor; callers normally observe it only when retries are disabled
/// (`max_retries = 0` still performs the initial attempt).
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum LlmError {
    /// Request fields violate documented ranges. No network call was issued.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The service signalled throttling (HTTP 429).
    #[error("Rate limited: {message}")]
    RateLimited {
        /// Status line / body sample from the throttling response
        message: String,
        /// Advisory wait from the `Retry-After` header, when the service sent one
        retry_after: Option<Duration>,
    },

    /// Throttling persisted past the retry budget.
    #[error("Rate limit retries exhausted after {attempts} attempts (last wait {last_wait:?}): {message}")]
    ThrottledExceeded {
        /// Total attempts performed, including the initial one
        attempts: u32,
        /// The wait applied before the final retry
        last_wait: Duration,
        /// Status line / body sample from the last throttling response
        message: String,
    },

    /// Any non-throttling transport or protocol error: connection failure,
    /// timeout, non-2xx status, malformed response body, SSE decode error.
    #[error("Transport failure: {message}")]
    TransportFailure {
        message: String,
        /// HTTP status, when the failure came from a response
        status: Option<u16>,
    },
}

impl LlmError {
    /// Create an `InvalidConfiguration` error
    pub fn invalid_configuration<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Create a `RateLimited` error
    pub fn rate_limited<S: Into<String>>(message: S, retry_after: Option<Duration>) -> Self {
        Self::RateLimited {
            message: message.into(),
            retry_after,
        }
    }

    /// Create a `TransportFailure` without an HTTP status
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::TransportFailure {
            message: message.into(),
            status: None,
        }
    }

    /// Create a `TransportFailure` carrying an HTTP status
    pub fn transport_with_status<S: Into<String>>(status: u16, message: S) -> Self {
        Self::TransportFailure {
            message: message.into(),
            status: Some(status),
        }
    }

    /// Whether the retry executor may retry this error.
    ///
    /// Only throttling is retried; an unclassified failure could mask a
    /// persistent error if retried automatically.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// The HTTP status associated with this error, when there is one
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::RateLimited { .. } | Self::ThrottledExceeded { .. } => Some(429),
            Self::TransportFailure { status, .. } => *status,
            Self::InvalidConfiguration(_) => None,
        }
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(error: reqwest::Error) -> Self {
        Self::TransportFailure {
            message: error.to_string(),
            status: error.status().map(|s| s.as_u16()),
        }
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(error: serde_json::Error) -> Self {
        Self::TransportFailure {
            message: format!("Malformed response body: {error}"),
            status: None,
        }
    }
}
