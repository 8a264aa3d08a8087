//! LLM provider integrations for aiblock.
//!
//! Each provider lives behind a cargo feature and implements
//! [`aiblock_interface::TextGenerator`].

#[cfg(feature = "gemini")]
pub mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{GeminiClient, GenerationConfig};
