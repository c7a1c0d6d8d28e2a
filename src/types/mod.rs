//! Core data types for chat requests and responses

mod message;
mod request;
mod response;

pub use message::{ChatMessage, ChatMessageBuilder, MessageRole};
pub use request::{
    ChatRequest, ChatRequestBuilder, CommonParams, CommonParamsBuilder, ReasoningEffort,
};
pub use response::{ChatResponse, FinishReason, Usage};
