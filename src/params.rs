//! Parameter validation
//!
//! Validates a [`ChatRequest`] before any network I/O. A violation is an
//! [`LlmError::InvalidConfiguration`] and the request is never sent.

use crate::error::LlmError;
use crate::types::ChatRequest;

/// Validate a chat request.
///
/// Checks performed:
/// - model name is non-empty
/// - the conversation has at least one message
/// - temperature is within `0.0..=2.0`
/// - `top_p` is within `0.0..=1.0`
/// - `max_tokens` is at least 1
pub fn validate_request(request: &ChatRequest) -> Result<(), LlmError> {
    let params = &request.common_params;

    if params.model.is_empty() {
        return Err(LlmError::invalid_configuration(
            "Model name cannot be empty",
        ));
    }

    if request.messages.is_empty() {
        return Err(LlmError::invalid_configuration(
            "Conversation must contain at least one message",
        ));
    }

    if let Some(temperature) = params.temperature
        && !(0.0..=2.0).contains(&temperature)
    {
        return Err(LlmError::invalid_configuration(format!(
            "Temperature must be between 0.0 and 2.0, got {temperature}"
        )));
    }

    if let Some(top_p) = params.top_p
        && !(0.0..=1.0).contains(&top_p)
    {
        return Err(LlmError::invalid_configuration(format!(
            "top_p must be between 0.0 and 1.0, got {top_p}"
        )));
    }

    if let Some(max_tokens) = params.max_tokens
        && max_tokens == 0
    {
        return Err(LlmError::invalid_configuration(
            "max_tokens must be at least 1",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatMessage;

    fn valid_request() -> ChatRequest {
        ChatRequest::builder()
            .model("openai/gpt-oss-20b")
            .message(ChatMessage::user("hi").build())
            .build()
    }

    #[test]
    fn accepts_a_well_formed_request() {
        let request = ChatRequest::builder()
            .model("openai/gpt-oss-20b")
            .message(ChatMessage::user("hi").build())
            .temperature(2.0)
            .top_p(1.0)
            .max_tokens(1)
            .build();
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let mut request = valid_request();
        request.common_params.temperature = Some(2.5);
        let error = validate_request(&request).unwrap_err();
        assert!(matches!(error, LlmError::InvalidConfiguration(_)));

        request.common_params.temperature = Some(-0.1);
        assert!(validate_request(&request).is_err());
    }

    #[test]
    fn rejects_empty_model_and_empty_conversation() {
        let request = ChatRequest::new(vec![ChatMessage::user("hi").build()]);
        assert!(validate_request(&request).is_err());

        let request = ChatRequest::builder().model("openai/gpt-oss-20b").build();
        assert!(validate_request(&request).is_err());
    }

    #[test]
    fn rejects_zero_max_tokens_and_bad_top_p() {
        let mut request = valid_request();
        request.common_params.max_tokens = Some(0);
        assert!(validate_request(&request).is_err());

        let mut request = valid_request();
        request.common_params.top_p = Some(1.5);
        assert!(validate_request(&request).is_err());
    }
}
