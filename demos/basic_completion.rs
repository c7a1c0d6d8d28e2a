//! Basic completion
//!
//! Sends a single-shot question to the default model and prints the response
//! text and token usage.
//!
//! ## Run
//! ```bash
//! GROQ_API_KEY=... cargo run --bin basic-completion
//! ```

use charsiu::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = GroqClient::builder()
        .model(DEFAULT_MODEL)
        .temperature(0.7)
        .max_tokens(1024)
        .reasoning_effort(ReasoningEffort::Medium)
        .build()?;

    println!("Exercising {DEFAULT_MODEL} (basic completion)");
    println!("{}", "=".repeat(50));

    let messages = vec![
        ChatMessage::user(
            "Hi, who are you? How do you differ from a general-purpose chat model \
             and from a dedicated reasoning model? A few sentences, please.",
        )
        .build(),
    ];

    let response = client.chat(messages).await?;

    println!("{}", response.content);
    println!("{}", "-".repeat(50));
    if let Some(usage) = &response.usage {
        println!(
            "Tokens: {} prompt + {} completion = {} total",
            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
        );
    }

    Ok(())
}
