//! Groq wire format
//!
//! Serde mappings for the OpenAI-compatible chat-completions envelope that
//! Groq serves. These types stay crate-private; the public surface only ever
//! sees [`ChatResponse`](crate::types::ChatResponse) and
//! [`ChatStreamEvent`](crate::streaming::ChatStreamEvent) values converted at
//! this boundary.

use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::types::{ChatMessage, ChatRequest, ChatResponse, FinishReason, ReasoningEffort, Usage};

/// Request body for `POST /chat/completions`
#[derive(Debug, Serialize)]
pub(crate) struct WireChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<ReasoningEffort>,
    pub stream: bool,
}

impl<'a> WireChatRequest<'a> {
    pub fn from_request(request: &'a ChatRequest) -> Self {
        let params = &request.common_params;
        Self {
            model: &params.model,
            messages: &request.messages,
            temperature: params.temperature,
            max_completion_tokens: params.max_tokens,
            top_p: params.top_p,
            stop: params.stop_sequences.as_deref(),
            reasoning_effort: request.reasoning_effort,
            stream: request.stream,
        }
    }
}

/// Response body for a non-streaming call
#[derive(Debug, Deserialize)]
pub(crate) struct WireChatResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<WireChoice>,
    #[serde(default)]
    pub usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireChoice {
    pub message: WireMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct WireUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

impl From<WireUsage> for Usage {
    fn from(usage: WireUsage) -> Self {
        Self {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        }
    }
}

impl WireChatResponse {
    /// Convert into the public response type.
    ///
    /// An envelope without a first choice or without message content is a
    /// protocol violation and maps to `TransportFailure`.
    pub fn into_chat_response(self) -> Result<ChatResponse, LlmError> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::transport("Response contained no choices"))?;

        let content = choice
            .message
            .content
            .ok_or_else(|| LlmError::transport("Response choice contained no content"))?;

        Ok(ChatResponse {
            content,
            model: self.model,
            finish_reason: choice.finish_reason.as_deref().map(FinishReason::from_wire),
            usage: self.usage.map(Usage::from),
        })
    }
}

/// One SSE `data:` payload of a streaming call
#[derive(Debug, Deserialize)]
pub(crate) struct WireStreamChunk {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<WireStreamChoice>,
    #[serde(default)]
    pub usage: Option<WireUsage>,
    /// Groq reports usage for streams under this vendor extension
    #[serde(default)]
    pub x_groq: Option<WireXGroq>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireStreamChoice {
    #[serde(default)]
    pub index: Option<usize>,
    #[serde(default)]
    pub delta: WireDelta,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct WireDelta {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireXGroq {
    #[serde(default)]
    pub usage: Option<WireUsage>,
}

impl WireStreamChunk {
    /// Usage totals, wherever the service put them
    pub fn usage(&mut self) -> Option<WireUsage> {
        self.usage
            .take()
            .or_else(|| self.x_groq.take().and_then(|x| x.usage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChatMessage, ChatRequest, ReasoningEffort};

    #[test]
    fn request_serializes_the_groq_envelope() {
        let request = ChatRequest::builder()
            .model("openai/gpt-oss-20b")
            .message(ChatMessage::user("hi").build())
            .temperature(0.7)
            .max_tokens(1024)
            .reasoning_effort(ReasoningEffort::Medium)
            .stream(true)
            .build();

        let json = serde_json::to_value(WireChatRequest::from_request(&request)).unwrap();
        assert_eq!(json["model"], "openai/gpt-oss-20b");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_completion_tokens"], 1024);
        assert_eq!(json["reasoning_effort"], "medium");
        assert_eq!(json["stream"], true);
        assert!(json.get("stop").is_none());
        assert!(json.get("top_p").is_none());
    }

    #[test]
    fn response_converts_first_choice() {
        let body = serde_json::json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "openai/gpt-oss-20b",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello there"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 12, "completion_tokens": 4, "total_tokens": 16}
        });

        let wire: WireChatResponse = serde_json::from_value(body).unwrap();
        let response = wire.into_chat_response().unwrap();
        assert_eq!(response.content, "Hello there");
        assert_eq!(response.model.as_deref(), Some("openai/gpt-oss-20b"));
        assert_eq!(response.finish_reason, Some(FinishReason::Stop));
        assert_eq!(response.usage.unwrap().total_tokens, 16);
    }

    #[test]
    fn response_without_choices_is_a_transport_failure() {
        let wire: WireChatResponse =
            serde_json::from_value(serde_json::json!({"choices": []})).unwrap();
        assert!(matches!(
            wire.into_chat_response().unwrap_err(),
            LlmError::TransportFailure { .. }
        ));
    }

    #[test]
    fn stream_chunk_finds_usage_in_the_vendor_extension() {
        let body = serde_json::json!({
            "model": "openai/gpt-oss-20b",
            "choices": [{"index": 0, "delta": {"content": "Hi"}, "finish_reason": null}],
            "x_groq": {"usage": {"prompt_tokens": 3, "completion_tokens": 1, "total_tokens": 4}}
        });

        let mut chunk: WireStreamChunk = serde_json::from_value(body).unwrap();
        assert_eq!(chunk.choices[0].delta.content.as_deref(), Some("Hi"));
        assert_eq!(chunk.usage().unwrap().total_tokens, 4);
    }
}
