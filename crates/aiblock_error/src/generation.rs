//! Generation failure taxonomy.

use crate::TransportErrorKind;

/// Reasons a single generation request can fail.
///
/// Every variant is terminal for the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// No credential is configured under the named settings key
    #[display("No Gemini API key configured (settings key `{}`)", _0)]
    MissingCredential(String),
    /// Instruction or target markup was empty
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
    /// The outbound model call failed
    #[display("Transport failed: {}", _0)]
    Transport(TransportErrorKind),
    /// Model response contains no `{ ... }` region
    #[display("No JSON object found in model response")]
    NoJsonObjectFound,
    /// Extracted region is not valid JSON
    #[display("Malformed JSON in model response: {}", _0)]
    MalformedJson(String),
    /// JSON object does not have exactly the string keys `html` and `css`
    #[display("Model response does not match the html/css schema: {}", _0)]
    SchemaMismatch(String),
}

impl GenerationErrorKind {
    /// Whether the user can fix this failure by changing settings or input.
    pub fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            GenerationErrorKind::MissingCredential(_) | GenerationErrorKind::InvalidRequest(_)
        )
    }

    /// Message suitable for showing to the user.
    ///
    /// Configuration and input problems get a specific message; everything
    /// else collapses into a generic failure notice.
    pub fn user_message(&self) -> String {
        match self {
            GenerationErrorKind::MissingCredential(key) => format!(
                "Gemini API key is not set. Configure `{}` and try again.",
                key
            ),
            GenerationErrorKind::InvalidRequest(msg) => {
                format!("Please check your input: {}", msg)
            }
            _ => "Code generation failed. Please try again.".to_string(),
        }
    }
}

/// Generation failure with source location tracking.
///
/// # Examples
///
/// ```
/// use aiblock_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::NoJsonObjectFound);
/// assert!(format!("{}", err).contains("No JSON object"));
/// assert!(!err.kind().is_user_actionable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }

    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        self.kind.user_message()
    }
}

impl From<GenerationErrorKind> for GenerationError {
    #[track_caller]
    fn from(kind: GenerationErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<crate::TransportError> for GenerationError {
    #[track_caller]
    fn from(err: crate::TransportError) -> Self {
        Self::new(GenerationErrorKind::Transport(err.kind))
    }
}
