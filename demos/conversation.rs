//! Multi-turn conversation
//!
//! Seeds a conversation history, adds a follow-up user turn and streams the
//! reply, demonstrating that context carries across turns. History is a
//! caller-owned `Vec<ChatMessage>`.
//!
//! ## Run
//! ```bash
//! GROQ_API_KEY=... cargo run --bin conversation
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
        .temperature(1.0)
        .max_tokens(1024)
        .reasoning_effort(ReasoningEffort::Medium)
        .build()?;

    println!("Exercising {DEFAULT_MODEL} (multi-turn conversation)");
    println!("{}", "=".repeat(50));

    let mut history = vec![
        ChatMessage::system("You are a concise programming tutor.").build(),
        ChatMessage::user("What makes Rust's ownership model different from garbage collection?")
            .build(),
        ChatMessage::assistant(
            "Ownership moves the bookkeeping to compile time: every value has exactly one \
             owner, and the compiler inserts the cleanup when the owner goes out of scope. \
             A garbage collector instead discovers unreachable values at runtime, which \
             costs pauses and memory headroom but allows freely shared references.",
        )
        .build(),
    ];

    // Follow-up turn that only makes sense with the context above
    history.push(ChatMessage::user("Can you show that with a three-line example?").build());

    let mut stream = client.chat_stream(history.clone()).await?;
    let mut reply = String::new();

    while let Some(event) = stream.next().await {
        if let ChatStreamEvent::ContentDelta { delta, .. } = event? {
            print!("{delta}");
            std::io::stdout().flush()?;
            reply.push_str(&delta);
        }
    }
    println!();

    // Keep the assistant's reply so a further turn would see it
    history.push(ChatMessage::assistant(reply).build());
    println!("{}", "-".repeat(50));
    println!("History now holds {} messages", history.len());

    Ok(())
}
