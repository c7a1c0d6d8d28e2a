//! Shared helpers for integration tests
#![allow(dead_code)]

use std::time::Duration;

use charsiu::prelude::*;

/// Client wired to a mock server, with a short backoff for fast tests
pub fn test_client(base_url: &str, policy: RetryPolicy) -> GroqClient {
    GroqClient::builder()
        .api_key("test-key")
        .base_url(base_url)
        .model("openai/gpt-oss-20b")
        .retry_policy(policy)
        .build()
        .expect("test client should build")
}

pub fn fast_policy(max_retries: u32) -> RetryPolicy {
    RetryPolicy::new()
        .with_max_retries(max_retries)
        .with_default_backoff(Duration::from_millis(30))
}

/// A well-formed non-streaming completion envelope
pub fn completion_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "openai/gpt-oss-20b",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30}
    })
}

/// An SSE body delivering the given fragments, then finish metadata and [DONE]
pub fn sse_body(fragments: &[&str]) -> String {
    let mut body = String::new();
    for fragment in fragments {
        let chunk = serde_json::json!({
            "model": "openai/gpt-oss-20b",
            "choices": [{"index": 0, "delta": {"content": fragment}, "finish_reason": null}]
        });
        body.push_str(&format!("data: {chunk}\n\n"));
    }
    let last = serde_json::json!({
        "model": "openai/gpt-oss-20b",
        "choices": [{"index": 0, "delta": {}, "finish_reason": "stop"}],
        "x_groq": {"usage": {"prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30}}
    });
    body.push_str(&format!("data: {last}\n\n"));
    body.push_str("data: [DONE]\n\n");
    body
}
