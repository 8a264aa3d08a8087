//! Generation request type.

use aiblock_error::{GenerationError, GenerationErrorKind};
use serde::Serialize;

/// One user-initiated transform request.
///
/// Holds the free-text styling instruction and the markup it applies to.
/// Both are guaranteed non-blank; the request is immutable once built.
///
/// # Examples
///
/// ```
/// use aiblock_core::GenerationRequest;
///
/// let request = GenerationRequest::new("Make it a card", "<div>hi</div>").unwrap();
/// assert_eq!(request.target_markup(), "<div>hi</div>");
///
/// assert!(GenerationRequest::new("   ", "<div>hi</div>").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GenerationRequest {
    /// What the user wants changed
    instruction: String,
    /// The HTML to transform
    target_markup: String,
}

impl GenerationRequest {
    /// Creates a request, rejecting blank instruction or markup.
    ///
    /// Text is kept verbatim; only the emptiness check trims.
    #[track_caller]
    pub fn new(
        instruction: impl Into<String>,
        target_markup: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        let instruction = instruction.into();
        let target_markup = target_markup.into();

        if instruction.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::InvalidRequest(
                "instruction is empty".to_string(),
            )));
        }
        if target_markup.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::InvalidRequest(
                "target markup is empty".to_string(),
            )));
        }

        Ok(Self {
            instruction,
            target_markup,
        })
    }

    /// The styling instruction.
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// The markup to transform.
    pub fn target_markup(&self) -> &str {
        &self.target_markup
    }
}
