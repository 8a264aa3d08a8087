//! Google Gemini provider.
//!
//! A thin REST client for the `generateContent` endpoint: one prompt in,
//! the first candidate's text out.

mod client;
mod conversions;
mod dto;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient};
pub use conversions::{from_response, to_request};
pub use dto::{
    ApiErrorDetail, ApiErrorResponse, Candidate, Content, GenerateContentRequest,
    GenerateContentRequestBuilder, GenerateContentResponse, GenerationConfig, Part,
    PromptFeedback, UsageMetadata,
};
