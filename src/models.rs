//! Model catalog
//!
//! Groq-hosted models this harness knows about. The list is a convenience
//! for demos and display names; the service remains the source of truth and
//! any model id is accepted by the client.

/// Default chat-completions endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default model exercised by the demos
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-20b";

/// A known hosted model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    /// Model id as the service expects it
    pub id: &'static str,
    /// Human-readable name
    pub display_name: &'static str,
    /// Whether the model honors the `reasoning_effort` parameter
    pub supports_reasoning_effort: bool,
}

/// Models the harness knows about
pub const SUPPORTED_MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "openai/gpt-oss-20b",
        display_name: "GPT-OSS 20B (by OpenAI)",
        supports_reasoning_effort: true,
    },
    ModelInfo {
        id: "openai/gpt-oss-120b",
        display_name: "GPT-OSS 120B (by OpenAI)",
        supports_reasoning_effort: true,
    },
    ModelInfo {
        id: "meta-llama/llama-4-maverick-17b-128e-instruct",
        display_name: "LLaMA 4 Maverick 17B (by Meta AI)",
        supports_reasoning_effort: false,
    },
    ModelInfo {
        id: "meta-llama/llama-4-scout-17b-16e-instruct",
        display_name: "LLaMA 4 Scout 17B (by Meta AI)",
        supports_reasoning_effort: false,
    },
    ModelInfo {
        id: "moonshotai/kimi-k2-instruct",
        display_name: "Kimi K2 Instruct (by Moonshot AI)",
        supports_reasoning_effort: false,
    },
    ModelInfo {
        id: "qwen/qwen3-32b",
        display_name: "Qwen 3 32B (by Alibaba Group)",
        supports_reasoning_effort: false,
    },
];

/// Look up a model by id
pub fn find_model(id: &str) -> Option<&'static ModelInfo> {
    SUPPORTED_MODELS.iter().find(|model| model.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_in_the_catalog() {
        let info = find_model(DEFAULT_MODEL).expect("default model should be listed");
        assert!(info.supports_reasoning_effort);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        assert!(find_model("openai/gpt-5").is_none());
    }
}
