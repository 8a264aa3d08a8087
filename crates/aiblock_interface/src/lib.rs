//! Capability traits for the aiblock library.
//!
//! The generator core depends on two things from its environment: a way to
//! send a prompt to a text model, and a way to look up the API key. Both are
//! traits here so hosts and tests can supply their own implementations.

mod credential;
mod text_generator;

pub use credential::CredentialSource;
pub use text_generator::TextGenerator;
