//! Response normalization.
//!
//! Models do not always honor formatting instructions. The reply may be the
//! bare object we asked for, or the object wrapped in Markdown fences or
//! commentary. Normalization tries a direct parse first and then falls back
//! to the outermost `{ ... }` region.

use aiblock_core::{GeneratedCode, RawModelResponse};
use aiblock_error::{GenerationError, GenerationErrorKind};
use serde_json::Value as JsonValue;
use tracing::{debug, instrument, warn};

/// Convert raw model text into a validated [`GeneratedCode`].
///
/// Steps, each a fallback for the previous one:
/// 1. Parse the whole text as JSON; accept it if it matches the schema.
/// 2. Take the span from the first `{` to the last `}`; if there is none,
///    fail with `NoJsonObjectFound`.
/// 3. If the span is not valid JSON, fail with `MalformedJson`.
/// 4. If it parses but is not an object with exactly the string keys
///    `html` and `css`, each given once, fail with `SchemaMismatch`.
///
/// # Examples
///
/// ```
/// use aiblock_codegen::normalize;
/// use aiblock_core::RawModelResponse;
///
/// let raw = RawModelResponse::new("```json\n{\"html\":\"<p>x</p>\",\"css\":\"p{color:red}\"}\n```");
/// let code = normalize(&raw).unwrap();
/// assert_eq!(code.css(), "p{color:red}");
/// ```
#[instrument(skip_all, fields(text_len = raw.text().len()))]
pub fn normalize(raw: &RawModelResponse) -> Result<GeneratedCode, GenerationError> {
    let text = raw.text();

    if let Ok(code) = serde_json::from_str::<GeneratedCode>(text) {
        debug!("Response parsed directly");
        return Ok(code);
    }

    let Some(candidate) = extract_object(text) else {
        warn!("No JSON object found in response");
        return Err(GenerationError::new(GenerationErrorKind::NoJsonObjectFound));
    };

    debug!(
        json_length = candidate.len(),
        "Extracted JSON region from response"
    );

    serde_json::from_str::<JsonValue>(candidate).map_err(|e| {
        warn!(error = %e, "Extracted region is not valid JSON");
        GenerationError::new(GenerationErrorKind::MalformedJson(e.to_string()))
    })?;

    // Parse the text, not the value, so duplicate keys are rejected.
    serde_json::from_str::<GeneratedCode>(candidate).map_err(|e| {
        warn!(error = %e, "JSON does not match html/css schema");
        GenerationError::new(GenerationErrorKind::SchemaMismatch(e.to_string()))
    })
}

/// Span from the first `{` through the last `}`, if they are ordered.
fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
