//! Outbound text-generation capability.

use aiblock_core::{ApiKey, RawModelResponse};
use aiblock_error::TransportError;
use async_trait::async_trait;

/// Sends one prompt to a text model and returns its raw reply.
///
/// Implementations perform a single request: no retries, no streaming.
/// Validation of the reply is left to the caller.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Invoke the model with `prompt`, authorized by `api_key`.
    async fn invoke(
        &self,
        api_key: &ApiKey,
        prompt: &str,
    ) -> Result<RawModelResponse, TransportError>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;

    /// Model identifier for logging.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for std::sync::Arc<T> {
    async fn invoke(
        &self,
        api_key: &ApiKey,
        prompt: &str,
    ) -> Result<RawModelResponse, TransportError> {
        (**self).invoke(api_key, prompt).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
