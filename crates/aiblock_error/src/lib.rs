//! Error types for the aiblock library.
//!
//! This crate provides the foundation error types used throughout the aiblock
//! workspace. [`GenerationError`] is the failure returned by a single
//! generation request; [`AiblockError`] wraps every error the facade and CLI
//! can encounter.

mod cli;
mod config;
mod generation;
mod transport;

pub use cli::CliError;
pub use config::ConfigError;
pub use generation::{GenerationError, GenerationErrorKind};
pub use transport::{TransportError, TransportErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum AiblockErrorKind {
    /// Generation request failed
    Generation(GenerationError),
    /// Outbound call failed outside of a generation request
    Transport(TransportError),
    /// Configuration error
    Config(ConfigError),
    /// Command input or output error
    Cli(CliError),
}

impl std::fmt::Display for AiblockErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AiblockErrorKind::Generation(e) => write!(f, "{}", e),
            AiblockErrorKind::Transport(e) => write!(f, "{}", e),
            AiblockErrorKind::Config(e) => write!(f, "{}", e),
            AiblockErrorKind::Cli(e) => write!(f, "{}", e),
        }
    }
}

/// aiblock error with kind discrimination.
#[derive(Debug)]
pub struct AiblockError(Box<AiblockErrorKind>);

impl AiblockError {
    /// Create a new error from a kind.
    pub fn new(kind: AiblockErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AiblockErrorKind {
        &self.0
    }
}

impl std::fmt::Display for AiblockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "aiblock Error: {}", self.0)
    }
}

impl std::error::Error for AiblockError {}

// Generic From implementation for any type that converts to AiblockErrorKind
impl<T> From<T> for AiblockError
where
    T: Into<AiblockErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for aiblock operations.
pub type AiblockResult<T> = std::result::Result<T, AiblockError>;
