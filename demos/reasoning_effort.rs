//! Reasoning effort comparison
//!
//! Asks the same question at low, medium and high reasoning effort with a
//! low temperature, printing each answer for comparison.
//!
//! ## Run
//! ```bash
//! GROQ_API_KEY=... cargo run --bin reasoning-effort
//! ```

use charsiu::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = GroqClient::builder().model(DEFAULT_MODEL).build()?;

    println!("Exercising {DEFAULT_MODEL} (reasoning effort levels)");
    println!("{}", "=".repeat(50));

    for effort in [
        ReasoningEffort::Low,
        ReasoningEffort::Medium,
        ReasoningEffort::High,
    ] {
        println!("\nreasoning_effort = {effort}");
        println!("{}", "-".repeat(50));

        let request = ChatRequest::builder()
            .message(
                ChatMessage::user(
                    "If I have 3 apples, buy 2 more, then give away 1, \
                     how many apples do I have? Show your reasoning step by step.",
                )
                .build(),
            )
            .temperature(0.1)
            .max_tokens(256)
            .reasoning_effort(effort)
            .build();

        match client.chat_request(request).await {
            Ok(response) => println!("{}", response.content),
            Err(error) => eprintln!("Error at {effort} effort: {error}"),
        }
    }

    Ok(())
}
