//! Core data types for the aiblock library.
//!
//! This crate provides the data types shared by the prompt builder, the
//! response normalizer, and the model clients.

mod api_key;
mod request;
mod response;

pub use api_key::ApiKey;
pub use request::GenerationRequest;
pub use response::{GeneratedCode, RawModelResponse};
