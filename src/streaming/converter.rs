//! Groq SSE stream conversion
//!
//! Converts the `data: {json}` SSE payloads emitted by the Groq
//! chat-completions endpoint into [`ChatStreamEvent`]s. The resulting stream
//! is lazy and single-pass: fragments surface as they arrive and nothing
//! buffers the full response text.

use eventsource_stream::Eventsource;
use futures_util::StreamExt;

use crate::error::LlmError;
use crate::types::{ChatResponse, FinishReason, Usage};
use crate::wire::WireStreamChunk;

use super::{ChatStream, ChatStreamEvent};

/// End-of-stream metadata accumulated while fragments pass through
#[derive(Debug, Default)]
struct StreamState {
    model: Option<String>,
    finish_reason: Option<FinishReason>,
    usage: Option<Usage>,
}

impl StreamState {
    /// Fold one chunk into the state, emitting the events it carries
    fn apply(&mut self, mut chunk: WireStreamChunk) -> Vec<ChatStreamEvent> {
        let mut events = Vec::new();

        if self.model.is_none() {
            self.model = chunk.model.take();
        }

        if let Some(usage) = chunk.usage() {
            let usage = Usage::from(usage);
            self.usage = Some(usage);
            events.push(ChatStreamEvent::UsageUpdate(usage));
        }

        for choice in chunk.choices {
            if let Some(reason) = choice.finish_reason.as_deref() {
                self.finish_reason = Some(FinishReason::from_wire(reason));
            }
            if let Some(delta) = choice.delta.content
                && !delta.is_empty()
            {
                events.push(ChatStreamEvent::ContentDelta {
                    delta,
                    index: choice.index,
                });
            }
        }

        events
    }

    fn into_end_event(self) -> ChatStreamEvent {
        ChatStreamEvent::StreamEnd {
            response: ChatResponse {
                content: String::new(),
                model: self.model,
                finish_reason: self.finish_reason,
                usage: self.usage,
            },
        }
    }
}

/// Convert an established SSE response into a [`ChatStream`].
///
/// A `data: [DONE]` marker (or a clean end of the byte stream) terminates the
/// stream with a `StreamEnd` event. A decode error terminates it with a
/// single `TransportFailure` item; the stream is not restartable.
pub(crate) fn chat_stream_from_response(response: reqwest::Response) -> ChatStream {
    let byte_stream = response.bytes_stream();

    let stream = async_stream::stream! {
        let mut state = StreamState::default();
        let mut events = byte_stream.eventsource();

        while let Some(item) = events.next().await {
            let event = match item {
                Ok(event) => event,
                Err(error) => {
                    yield Err(LlmError::transport(format!("SSE stream error: {error}")));
                    return;
                }
            };

            let data = event.data.trim();
            if data.is_empty() {
                continue;
            }
            if data == "[DONE]" {
                yield Ok(state.into_end_event());
                return;
            }

            let chunk: WireStreamChunk = match serde_json::from_str(data) {
                Ok(chunk) => chunk,
                Err(error) => {
                    yield Err(LlmError::transport(format!(
                        "Malformed stream chunk: {error}"
                    )));
                    return;
                }
            };

            for event in state.apply(chunk) {
                yield Ok(event);
            }
        }

        // Server closed without [DONE]; still surface what we know.
        yield Ok(state.into_end_event());
    };

    Box::pin(stream)
}
