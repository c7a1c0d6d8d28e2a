//! Streaming Module
//!
//! SSE-based streaming for chat completions:
//! - `ChatStream` type and its events
//! - Conversion from Groq SSE payloads to [`ChatStreamEvent`]s

mod converter;
mod events;

pub(crate) use converter::chat_stream_from_response;
pub use events::ChatStreamEvent;

use std::pin::Pin;

use futures::Stream;

use crate::error::LlmError;

/// A lazy stream of chat events.
///
/// Finite, single-pass and not restartable; the caller concatenates
/// `ContentDelta` fragments when a complete string is needed.
pub type ChatStream = Pin<Box<dyn Stream<Item = Result<ChatStreamEvent, LlmError>> + Send>>;
