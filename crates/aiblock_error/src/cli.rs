//! Command-line error types.

/// Failure reading command input or writing its output.
#[derive(Debug, Clone)]
pub struct CliError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl CliError {
    /// Create a new CliError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CLI Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for CliError {}
