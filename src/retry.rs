//! Retry Mechanism Module
//!
//! Bounded retry for throttled chat calls. A throttling signal (HTTP 429) is
//! the only retried condition; the wait honors the service's advisory
//! `Retry-After` value when present and falls back to the configured default.
//! Every other error propagates immediately.

use std::time::Duration;

use reqwest::header::HeaderMap;
use tokio::time::sleep;

use crate::error::LlmError;

/// Retry policy configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt
    pub max_retries: u32,
    /// Wait applied when the service supplies no advisory duration
    pub default_backoff: Duration,
    /// Upper bound applied to any wait, advisory or default
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            default_backoff: Duration::from_secs(2),
            max_backoff: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Create a new retry policy with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of retries
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the default backoff
    pub const fn with_default_backoff(mut self, backoff: Duration) -> Self {
        self.default_backoff = backoff;
        self
    }

    /// Set the maximum backoff
    pub const fn with_max_backoff(mut self, backoff: Duration) -> Self {
        self.max_backoff = backoff;
        self
    }

    /// Check the policy itself is usable
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.default_backoff.is_zero() {
            return Err(LlmError::invalid_configuration(
                "default_backoff must be greater than zero",
            ));
        }
        Ok(())
    }

    /// The wait before the next attempt.
    ///
    /// The service's advisory value is authoritative when present; otherwise
    /// the default applies. Either way the wait is capped at `max_backoff`.
    pub fn backoff_for(&self, retry_after: Option<Duration>) -> Duration {
        retry_after
            .unwrap_or(self.default_backoff)
            .min(self.max_backoff)
    }
}

/// Retry executor that drives an operation through the policy.
///
/// The attempt counter and computed wait live on the executor's stack for the
/// duration of one `execute` call; nothing is shared across calls.
pub struct RetryExecutor {
    policy: RetryPolicy,
}

impl RetryExecutor {
    /// Create a new retry executor
    pub const fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// Execute an operation, retrying on throttling.
    ///
    /// Terminal outcomes:
    /// - success: the operation's value;
    /// - [`LlmError::ThrottledExceeded`] after `max_retries + 1` throttled
    ///   attempts, carrying the attempt count and last wait;
    /// - any non-throttling error, returned from the attempt that produced it.
    pub async fn execute<F, Fut, T>(&self, mut operation: F) -> Result<T, LlmError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, LlmError>>,
    {
        self.policy.validate()?;

        let mut attempt: u32 = 1;
        let mut last_wait = Duration::ZERO;

        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(LlmError::RateLimited {
                    message,
                    retry_after,
                }) => {
                    if attempt > self.policy.max_retries {
                        return Err(LlmError::ThrottledExceeded {
                            attempts: attempt,
                            last_wait,
                            message,
                        });
                    }

                    let wait = self.policy.backoff_for(retry_after);
                    tracing::warn!(
                        attempt,
                        max_retries = self.policy.max_retries,
                        wait_ms = wait.as_millis() as u64,
                        advisory = retry_after.is_some(),
                        "rate limited, backing off before retry"
                    );
                    last_wait = wait;
                    sleep(wait).await;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }
}

/// Classify a non-success HTTP response into an [`LlmError`].
///
/// 429 becomes the retryable [`LlmError::RateLimited`], carrying the parsed
/// `Retry-After` value when the service sent one. Everything else is a
/// [`LlmError::TransportFailure`] with the status attached.
pub fn classify_http_error(status: u16, headers: &HeaderMap, body: &str) -> LlmError {
    // Limit body sample size to keep error messages readable
    let body_sample: String = body.chars().take(200).collect();

    if status == 429 {
        return LlmError::rate_limited(
            format!("HTTP 429: {body_sample}"),
            parse_retry_after(headers),
        );
    }

    LlmError::transport_with_status(status, format!("HTTP {status}: {body_sample}"))
}

/// Parse the `Retry-After` header.
///
/// Only the delta-seconds form is honored; an HTTP-date value yields `None`
/// and the caller falls back to the default backoff.
pub fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
