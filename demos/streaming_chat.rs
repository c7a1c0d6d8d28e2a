//! Streaming chat
//!
//! Streams a creative prompt and prints fragments as they arrive, then the
//! length of the concatenated result.
//!
//! ## Run
//! ```bash
//! GROQ_API_KEY=... cargo run --bin streaming-chat
//! ```

use std::io::Write;

use charsiu::prelude::*;
use futures_util::StreamExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = GroqClient::builder()
        .model(DEFAULT_MODEL)
        .temperature(0.8)
        .max_tokens(512)
        .reasoning_effort(ReasoningEffort::Medium)
        .build()?;

    println!("Exercising {DEFAULT_MODEL} (streaming)");
    println!("{}", "=".repeat(50));

    let messages = vec![
        ChatMessage::user(
            "Tell me a short story about a robot learning to paint. \
             Make it creative and engaging.",
        )
        .build(),
    ];

    let mut stream = client.chat_stream(messages).await?;
    let mut full_response = String::new();

    while let Some(event) = stream.next().await {
        match event? {
            ChatStreamEvent::ContentDelta { delta, .. } => {
                print!("{delta}");
                std::io::stdout().flush()?;
                full_response.push_str(&delta);
            }
            ChatStreamEvent::UsageUpdate(usage) => {
                tracing::debug!(total_tokens = usage.total_tokens, "usage reported");
            }
            ChatStreamEvent::StreamEnd { response } => {
                println!();
                println!("{}", "-".repeat(50));
                if let Some(reason) = &response.finish_reason {
                    println!("Finish reason: {reason:?}");
                }
            }
        }
    }

    println!("Received {} characters", full_response.chars().count());

    Ok(())
}
