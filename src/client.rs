//! Groq chat client
//!
//! A typed client for the Groq chat-completions API. Every call runs
//! validate → serialize → send → classify inside the retry executor;
//! streaming calls retry the handshake only, since an established stream is
//! single-pass.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::LlmError;
use crate::models::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::params::validate_request;
use crate::retry::{RetryExecutor, RetryPolicy, classify_http_error};
use crate::streaming::{ChatStream, chat_stream_from_response};
use crate::types::{ChatMessage, ChatRequest, ChatResponse, CommonParams, ReasoningEffort};
use crate::wire::{WireChatRequest, WireChatResponse};

/// Chat capability
///
/// The seam between callers and a chat-completions backend. `GroqClient`
/// implements it against the hosted service; tests implement it with doubles.
#[async_trait]
pub trait ChatCapability {
    /// Execute a chat request and return the complete response
    async fn chat_request(&self, request: ChatRequest) -> Result<ChatResponse, LlmError>;

    /// Execute a chat request and return a lazy stream of fragments
    async fn chat_stream_request(&self, request: ChatRequest) -> Result<ChatStream, LlmError>;

    /// Chat with the implementation's default parameters
    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<ChatResponse, LlmError> {
        self.chat_request(ChatRequest::new(messages)).await
    }

    /// Stream a chat with the implementation's default parameters
    async fn chat_stream(&self, messages: Vec<ChatMessage>) -> Result<ChatStream, LlmError> {
        self.chat_stream_request(ChatRequest::new(messages)).await
    }
}

/// Groq chat-completions client
///
/// Configuration is an explicitly constructed value; there is no process-wide
/// client state. Cloning is cheap (`reqwest::Client` is an `Arc` handle) and
/// clones share nothing mutable.
///
/// # Example
///
/// ```rust,no_run
/// use charsiu::prelude::*;
///
/// # async fn example() -> Result<(), charsiu::LlmError> {
/// let client = GroqClient::builder()
///     .api_key("gsk-...")
///     .model("openai/gpt-oss-20b")
///     .temperature(0.7)
///     .build()?;
///
/// let response = client.chat(vec![ChatMessage::user("Hello!").build()]).await?;
/// println!("{}", response.content);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GroqClient {
    api_key: SecretString,
    base_url: String,
    http_client: reqwest::Client,
    common_params: CommonParams,
    reasoning_effort: Option<ReasoningEffort>,
    retry_policy: RetryPolicy,
}

impl GroqClient {
    /// Create a builder for the client
    pub fn builder() -> GroqClientBuilder {
        GroqClientBuilder::default()
    }

    /// The configured retry policy
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn build_headers(&self) -> Result<HeaderMap, LlmError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let bearer = format!("Bearer {}", self.api_key.expose_secret());
        let mut value = HeaderValue::from_str(&bearer).map_err(|_| {
            LlmError::invalid_configuration("API key contains invalid header characters")
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);

        Ok(headers)
    }

    /// Fill unset request fields from the client defaults and pin the
    /// transport mode.
    fn resolve_request(&self, mut request: ChatRequest, stream: bool) -> ChatRequest {
        let params = &mut request.common_params;
        let defaults = &self.common_params;

        if params.model.is_empty() {
            params.model = defaults.model.clone();
        }
        if params.temperature.is_none() {
            params.temperature = defaults.temperature;
        }
        if params.max_tokens.is_none() {
            params.max_tokens = defaults.max_tokens;
        }
        if params.top_p.is_none() {
            params.top_p = defaults.top_p;
        }
        if params.stop_sequences.is_none() {
            params.stop_sequences = defaults.stop_sequences.clone();
        }
        if request.reasoning_effort.is_none() {
            request.reasoning_effort = self.reasoning_effort;
        }
        request.stream = stream;
        request
    }

    /// Validate, send and classify one request, retrying on throttling.
    async fn execute(&self, request: &ChatRequest) -> Result<reqwest::Response, LlmError> {
        validate_request(request)?;

        let url = self.chat_url();
        let headers = self.build_headers()?;
        let body = serde_json::to_value(WireChatRequest::from_request(request))?;

        tracing::debug!(
            model = %request.common_params.model,
            stream = request.stream,
            url = %url,
            "sending chat request"
        );

        let executor = RetryExecutor::new(self.retry_policy.clone());
        executor
            .execute(|| {
                let pending = self
                    .http_client
                    .post(&url)
                    .headers(headers.clone())
                    .json(&body);
                send_classified(pending)
            })
            .await
    }
}

/// Send one attempt and classify a non-success status
async fn send_classified(pending: reqwest::RequestBuilder) -> Result<reqwest::Response, LlmError> {
    let response = pending.send().await?;
    let status = response.status();

    if !status.is_success() {
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());
        return Err(classify_http_error(status.as_u16(), &headers, &body));
    }

    Ok(response)
}

#[async_trait]
impl ChatCapability for GroqClient {
    async fn chat_request(&self, request: ChatRequest) -> Result<ChatResponse, LlmError> {
        let request = self.resolve_request(request, false);
        let response = self.execute(&request).await?;

        let wire: WireChatResponse = response.json().await?;
        wire.into_chat_response()
    }

    async fn chat_stream_request(&self, request: ChatRequest) -> Result<ChatStream, LlmError> {
        let request = self.resolve_request(request, true);
        let response = self.execute(&request).await?;

        let is_sse = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_ascii_lowercase().contains("text/event-stream"))
            .unwrap_or(false);
        if !is_sse {
            return Err(LlmError::transport(
                "Expected an SSE response for a streaming request",
            ));
        }

        Ok(chat_stream_from_response(response))
    }
}

/// Builder for `GroqClient`
///
/// When no API key is supplied, `build` falls back to the `GROQ_API_KEY`
/// environment variable.
#[derive(Default)]
pub struct GroqClientBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    http_client: Option<reqwest::Client>,
    common_params: CommonParams,
    reasoning_effort: Option<ReasoningEffort>,
    retry_policy: RetryPolicy,
}

impl GroqClientBuilder {
    /// Set the API key
    pub fn api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set the base URL (defaults to the hosted Groq endpoint)
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Supply a pre-configured HTTP client
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Set the default model
    pub fn model<S: Into<String>>(mut self, model: S) -> Self {
        self.common_params.model = model.into();
        self
    }

    /// Set the default temperature
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.common_params.temperature = Some(temperature);
        self
    }

    /// Set the default maximum output tokens
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.common_params.max_tokens = Some(max_tokens);
        self
    }

    /// Set the default `top_p`
    pub fn top_p(mut self, top_p: f64) -> Self {
        self.common_params.top_p = Some(top_p);
        self
    }

    /// Set the default stop sequences
    pub fn stop_sequences(mut self, stop_sequences: Vec<String>) -> Self {
        self.common_params.stop_sequences = Some(stop_sequences);
        self
    }

    /// Set the default reasoning effort
    pub fn reasoning_effort(mut self, effort: ReasoningEffort) -> Self {
        self.reasoning_effort = Some(effort);
        self
    }

    /// Set the retry policy
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Build the client.
    ///
    /// Fails with `InvalidConfiguration` when no API key is available or the
    /// retry policy is unusable.
    pub fn build(mut self) -> Result<GroqClient, LlmError> {
        let api_key = match self.api_key.take() {
            Some(key) => key,
            None => std::env::var("GROQ_API_KEY")
                .map(SecretString::from)
                .map_err(|_| {
                    LlmError::invalid_configuration(
                        "No API key: pass api_key(..) or set GROQ_API_KEY",
                    )
                })?,
        };

        self.retry_policy.validate()?;

        if self.common_params.model.is_empty() {
            self.common_params.model = DEFAULT_MODEL.to_string();
        }

        Ok(GroqClient {
            api_key,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            http_client: self.http_client.unwrap_or_default(),
            common_params: self.common_params,
            reasoning_effort: self.reasoning_effort,
            retry_policy: self.retry_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> GroqClient {
        GroqClient::builder()
            .api_key("test-key")
            .base_url("http://localhost:9999/openai/v1/")
            .model("openai/gpt-oss-20b")
            .temperature(0.7)
            .reasoning_effort(ReasoningEffort::Medium)
            .build()
            .unwrap()
    }

    #[test]
    fn chat_url_normalizes_trailing_slash() {
        let client = test_client();
        assert_eq!(
            client.chat_url(),
            "http://localhost:9999/openai/v1/chat/completions"
        );
    }

    #[test]
    fn resolve_fills_defaults_and_pins_the_transport_mode() {
        let client = test_client();
        let request = ChatRequest::new(vec![ChatMessage::user("hi").build()]);
        let resolved = client.resolve_request(request, true);

        assert_eq!(resolved.common_params.model, "openai/gpt-oss-20b");
        assert_eq!(resolved.common_params.temperature, Some(0.7));
        assert_eq!(resolved.reasoning_effort, Some(ReasoningEffort::Medium));
        assert!(resolved.stream);
    }

    #[test]
    fn explicit_request_fields_win_over_client_defaults() {
        let client = test_client();
        let request = ChatRequest::builder()
            .model("openai/gpt-oss-120b")
            .message(ChatMessage::user("hi").build())
            .temperature(0.1)
            .reasoning_effort(ReasoningEffort::High)
            .build();
        let resolved = client.resolve_request(request, false);

        assert_eq!(resolved.common_params.model, "openai/gpt-oss-120b");
        assert_eq!(resolved.common_params.temperature, Some(0.1));
        assert_eq!(resolved.reasoning_effort, Some(ReasoningEffort::High));
        assert!(!resolved.stream);
    }

    #[test]
    fn bearer_header_is_marked_sensitive() {
        let client = test_client();
        let headers = client.build_headers().unwrap();
        let auth = headers.get(AUTHORIZATION).unwrap();
        assert!(auth.is_sensitive());
        assert_eq!(auth.to_str().unwrap(), "Bearer test-key");
    }
}
