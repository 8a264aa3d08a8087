//! Type conversions between aiblock and Gemini formats.

use crate::gemini::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};
use aiblock_core::RawModelResponse;
use aiblock_error::{TransportError, TransportErrorKind};

/// Wraps a prompt as a single user message.
pub fn to_request(
    prompt: &str,
    generation_config: Option<&GenerationConfig>,
) -> Result<GenerateContentRequest, TransportError> {
    let contents = vec![Content {
        role: Some("user".to_string()),
        parts: vec![Part::text(prompt)],
    }];

    GenerateContentRequest::builder()
        .contents(contents)
        .generation_config(generation_config.cloned())
        .build()
        .map_err(|e| {
            TransportError::new(TransportErrorKind::Request(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

/// Extracts the reply text from a Gemini response.
pub fn from_response(response: &GenerateContentResponse) -> Result<RawModelResponse, TransportError> {
    if let Some(text) = response.text() {
        return Ok(RawModelResponse::new(text));
    }

    let reason = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.clone())
        .map(|reason| format!("prompt blocked ({})", reason))
        .or_else(|| {
            response
                .candidates
                .first()
                .and_then(|candidate| candidate.finish_reason.clone())
                .map(|reason| format!("finish reason {}", reason))
        })
        .unwrap_or_else(|| "no candidates returned".to_string());

    Err(TransportError::new(TransportErrorKind::EmptyResponse(reason)))
}
