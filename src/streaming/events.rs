//! Streaming Event Types

use serde::{Deserialize, Serialize};

use crate::types::{ChatResponse, Usage};

/// One event of a streamed chat response.
///
/// Fragments arrive in order; concatenating every `ContentDelta` yields the
/// same text a non-streaming call with identical inputs would return.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ChatStreamEvent {
    /// Incremental text fragment
    ContentDelta {
        /// The fragment text
        delta: String,
        /// Choice index, when the service reported one
        index: Option<usize>,
    },
    /// Token usage totals, reported by the service near the end of the stream
    UsageUpdate(Usage),
    /// The stream finished.
    ///
    /// Carries final metadata (model, finish reason, usage); `content` is
    /// empty because fragment text is never re-buffered here.
    StreamEnd {
        /// Final response metadata
        response: ChatResponse,
    },
}
