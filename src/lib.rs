//! # Charsiu - A Rate-Limit-Aware Groq Chat Client
//!
//! Charsiu is a small, typed client for the Groq chat-completions API with a
//! bounded, rate-limit-aware request executor at its core. It exists to
//! exercise hosted models (basic completion, streaming, reasoning-effort
//! levels, multi-turn chat) without giving up typed requests, typed errors
//! or observable retries.
//!
#![deny(unsafe_code)]
//! ## Features
//!
//! - **Bounded retry on throttling**: HTTP 429 is retried up to a configured
//!   budget, honoring the service's advisory `Retry-After` value; every other
//!   failure propagates immediately.
//! - **Explicit response variants**: a call returns either a complete
//!   [`ChatResponse`] or a lazy [`ChatStream`] of fragments; nothing is
//!   buffered behind the caller's back.
//! - **Fail-fast validation**: out-of-range parameters are rejected before
//!   any network call.
//! - **Builder Pattern**: clients and requests are built with chained method
//!   calls; configuration is an explicit value, never process-global state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use charsiu::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads GROQ_API_KEY from the environment
//!     let client = GroqClient::builder()
//!         .model("openai/gpt-oss-20b")
//!         .temperature(0.7)
//!         .max_tokens(1024)
//!         .reasoning_effort(ReasoningEffort::Medium)
//!         .build()?;
//!
//!     let messages = vec![ChatMessage::user("Hello, who are you?").build()];
//!     let response = client.chat(messages).await?;
//!     println!("{}", response.content);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Streaming
//!
//! ```rust,no_run
//! use charsiu::prelude::*;
//! use futures_util::StreamExt;
//!
//! # async fn example(client: GroqClient) -> Result<(), charsiu::LlmError> {
//! let mut stream = client
//!     .chat_stream(vec![ChatMessage::user("Tell me a story.").build()])
//!     .await?;
//!
//! while let Some(event) = stream.next().await {
//!     if let ChatStreamEvent::ContentDelta { delta, .. } = event? {
//!         print!("{delta}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod params;
pub mod retry;
pub mod streaming;
pub mod types;

mod wire;

pub use client::{ChatCapability, GroqClient, GroqClientBuilder};
pub use error::LlmError;
pub use retry::{RetryExecutor, RetryPolicy};
pub use streaming::{ChatStream, ChatStreamEvent};
pub use types::{
    ChatMessage, ChatRequest, ChatResponse, CommonParams, FinishReason, MessageRole,
    ReasoningEffort, Usage,
};

/// Common imports for working with the client
pub mod prelude {
    pub use crate::client::{ChatCapability, GroqClient, GroqClientBuilder};
    pub use crate::error::LlmError;
    pub use crate::models::{DEFAULT_BASE_URL, DEFAULT_MODEL, SUPPORTED_MODELS};
    pub use crate::retry::RetryPolicy;
    pub use crate::streaming::{ChatStream, ChatStreamEvent};
    pub use crate::types::{
        ChatMessage, ChatRequest, ChatResponse, CommonParams, FinishReason, MessageRole,
        ReasoningEffort, Usage,
    };
}
