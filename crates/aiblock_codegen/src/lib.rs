//! Prompt assembly and response normalization for aiblock.
//!
//! [`CodeGenerator`] ties the pieces together: it looks up the credential,
//! builds the prompt with [`build_prompt`], sends it through a
//! [`TextGenerator`](aiblock_interface::TextGenerator), and validates the
//! reply with [`normalize`].

mod credential;
mod generator;
mod normalize;
mod prompt;

pub use credential::{EnvCredential, StaticCredential};
pub use generator::CodeGenerator;
pub use normalize::normalize;
pub use prompt::build_prompt;
