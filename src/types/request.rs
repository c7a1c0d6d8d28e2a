//! Chat request types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::message::ChatMessage;
use crate::error::LlmError;

/// Common AI parameters shared by every chat call
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CommonParams {
    /// Model name
    pub model: String,

    /// Temperature parameter (0.0 to 2.0)
    pub temperature: Option<f64>,

    /// Maximum output tokens, including reasoning tokens for reasoning models
    pub max_tokens: Option<u32>,

    /// `top_p` parameter (0.0 to 1.0)
    pub top_p: Option<f64>,

    /// Stop sequences
    pub stop_sequences: Option<Vec<String>>,
}

impl CommonParams {
    /// Create a builder for common parameters
    pub fn builder() -> CommonParamsBuilder {
        CommonParamsBuilder::default()
    }
}

/// Builder for `CommonParams`
#[derive(Debug, Clone, Default)]
pub struct CommonParamsBuilder {
    params: CommonParams,
}

impl CommonParamsBuilder {
    /// Set the model name
    pub fn model<S: Into<String>>(mut self, model: S) -> Self {
        self.params.model = model.into();
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.params.temperature = Some(temperature);
        self
    }

    /// Set the maximum output tokens
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.params.max_tokens = Some(max_tokens);
        self
    }

    /// Set `top_p`
    pub fn top_p(mut self, top_p: f64) -> Self {
        self.params.top_p = Some(top_p);
        self
    }

    /// Set stop sequences
    pub fn stop_sequences(mut self, stop_sequences: Vec<String>) -> Self {
        self.params.stop_sequences = Some(stop_sequences);
        self
    }

    /// Build the parameters
    pub fn build(self) -> CommonParams {
        self.params
    }
}

/// Reasoning effort level
///
/// Requests that the model spend more or less computation on deliberation
/// before answering. Supported by reasoning-capable models such as
/// `openai/gpt-oss-20b`; other models ignore it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    /// Minimal deliberation, fastest responses
    Low,
    /// Balanced deliberation
    #[default]
    Medium,
    /// Maximal deliberation, slowest responses
    High,
}

impl ReasoningEffort {
    /// The wire representation of this level
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ReasoningEffort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReasoningEffort {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(LlmError::invalid_configuration(format!(
                "Unknown reasoning effort '{other}' (expected low, medium or high)"
            ))),
        }
    }
}

/// Chat request configuration
///
/// Immutable once built; passed by value into the client.
///
/// # Example
///
/// ```rust
/// use charsiu::types::{ChatMessage, ChatRequest, ReasoningEffort};
///
/// let request = ChatRequest::builder()
///     .model("openai/gpt-oss-20b")
///     .message(ChatMessage::user("Why is the sky blue?").build())
///     .temperature(0.7)
///     .max_tokens(1024)
///     .reasoning_effort(ReasoningEffort::Medium)
///     .build();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChatRequest {
    /// The conversation messages
    pub messages: Vec<ChatMessage>,
    /// Common parameters
    pub common_params: CommonParams,
    /// Reasoning effort level, for reasoning-capable models
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<ReasoningEffort>,
    /// Stream the response
    pub stream: bool,
}

impl ChatRequest {
    /// Create a new chat request with messages
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            common_params: CommonParams::default(),
            reasoning_effort: None,
            stream: false,
        }
    }

    /// Create a builder for the chat request
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// Builder for `ChatRequest`
#[derive(Debug, Clone, Default)]
pub struct ChatRequestBuilder {
    request: ChatRequest,
}

impl ChatRequestBuilder {
    /// Add a message
    pub fn message(mut self, message: ChatMessage) -> Self {
        self.request.messages.push(message);
        self
    }

    /// Add multiple messages
    pub fn messages<I: IntoIterator<Item = ChatMessage>>(mut self, messages: I) -> Self {
        self.request.messages.extend(messages);
        self
    }

    /// Set all common parameters at once
    pub fn common_params(mut self, params: CommonParams) -> Self {
        self.request.common_params = params;
        self
    }

    /// Set the model name
    pub fn model<S: Into<String>>(mut self, model: S) -> Self {
        self.request.common_params.model = model.into();
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.request.common_params.temperature = Some(temperature);
        self
    }

    /// Set the maximum output tokens
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.request.common_params.max_tokens = Some(max_tokens);
        self
    }

    /// Set `top_p`
    pub fn top_p(mut self, top_p: f64) -> Self {
        self.request.common_params.top_p = Some(top_p);
        self
    }

    /// Set the reasoning effort level
    pub fn reasoning_effort(mut self, effort: ReasoningEffort) -> Self {
        self.request.reasoning_effort = Some(effort);
        self
    }

    /// Stream the response
    pub fn stream(mut self, stream: bool) -> Self {
        self.request.stream = stream;
        self
    }

    /// Build the request
    pub fn build(self) -> ChatRequest {
        self.request
    }
}
