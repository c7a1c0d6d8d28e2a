//! Chat response types

use serde::{Deserialize, Serialize};

/// Token usage statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Usage {
    /// Tokens consumed by the prompt
    pub prompt_tokens: u32,
    /// Tokens generated for the completion
    pub completion_tokens: u32,
    /// Total tokens billed
    pub total_tokens: u32,
}

/// Why the model stopped generating
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural end of the response
    Stop,
    /// The output token limit was reached
    Length,
    /// The response was cut by a content filter
    ContentFilter,
    /// Any reason this crate does not model
    #[serde(untagged)]
    Other(String),
}

impl FinishReason {
    /// Map a wire-format finish reason onto the enum
    pub fn from_wire(value: &str) -> Self {
        match value {
            "stop" => Self::Stop,
            "length" => Self::Length,
            "content_filter" => Self::ContentFilter,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Chat response
///
/// The complete result of a non-streaming chat call. Streaming calls surface
/// the same data incrementally as [`ChatStreamEvent`](crate::streaming::ChatStreamEvent)s;
/// the `StreamEnd` event carries a `ChatResponse` holding final metadata with
/// empty `content` (fragment text is never re-buffered).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ChatResponse {
    /// The generated text
    pub content: String,
    /// Model that produced the response, as reported by the service
    pub model: Option<String>,
    /// Why generation stopped
    pub finish_reason: Option<FinishReason>,
    /// Token usage, when the service reported it
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Create a response from text
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
            model: None,
            finish_reason: None,
            usage: None,
        }
    }

    /// The response text, when non-empty
    pub fn content_text(&self) -> Option<&str> {
        if self.content.is_empty() {
            None
        } else {
            Some(&self.content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_reason_maps_known_and_unknown_values() {
        assert_eq!(FinishReason::from_wire("stop"), FinishReason::Stop);
        assert_eq!(FinishReason::from_wire("length"), FinishReason::Length);
        assert_eq!(
            FinishReason::from_wire("tool_calls"),
            FinishReason::Other("tool_calls".to_string())
        );
    }

    #[test]
    fn content_text_is_none_for_empty_responses() {
        assert!(ChatResponse::default().content_text().is_none());
        assert_eq!(ChatResponse::new("hi").content_text(), Some("hi"));
    }
}
