//! Transport error types for the outbound model call.

/// Transport-level error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TransportErrorKind {
    /// Failed to build the HTTP client
    #[display("Failed to create client: {}", _0)]
    ClientCreation(String),
    /// Request could not be sent or completed
    #[display("Request failed: {}", _0)]
    Request(String),
    /// Provider answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason
        message: String,
    },
    /// Response body could not be decoded
    #[display("Failed to decode response: {}", _0)]
    Decode(String),
    /// Response decoded but carried no text
    #[display("Response contained no text: {}", _0)]
    EmptyResponse(String),
}

/// Transport error with source location tracking.
///
/// # Examples
///
/// ```
/// use aiblock_error::{TransportError, TransportErrorKind};
///
/// let err = TransportError::new(TransportErrorKind::HttpStatus {
///     status_code: 403,
///     message: "API key not valid".to_string(),
/// });
/// assert!(format!("{}", err).contains("HTTP 403"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", kind, line, file)]
pub struct TransportError {
    /// The kind of error that occurred
    pub kind: TransportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TransportError {
    /// Create a new TransportError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TransportErrorKind {
        &self.kind
    }
}
