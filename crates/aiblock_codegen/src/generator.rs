//! End-to-end generation: prompt, model call, normalization.

use crate::{build_prompt, normalize};
use aiblock_core::{GeneratedCode, GenerationRequest};
use aiblock_error::{GenerationError, GenerationErrorKind};
use aiblock_interface::{CredentialSource, TextGenerator};
use tracing::{debug, info, instrument, warn};

/// Turns an instruction and a piece of markup into validated HTML/CSS.
///
/// Each call is independent: the credential is looked up, the prompt is
/// built, the model is invoked once, and the reply is normalized. Nothing is
/// retried or cached.
pub struct CodeGenerator<T, C>
where
    T: TextGenerator,
    C: CredentialSource,
{
    transport: T,
    credentials: C,
}

impl<T, C> CodeGenerator<T, C>
where
    T: TextGenerator,
    C: CredentialSource,
{
    /// Create a generator from a model transport and a credential source.
    pub fn new(transport: T, credentials: C) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    /// Generate styled markup for `target_markup` following `instruction`.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` if either input is blank
    /// - `MissingCredential` if no API key is configured; the transport is
    ///   not called
    /// - `Transport` if the model call fails
    /// - `NoJsonObjectFound`, `MalformedJson`, `SchemaMismatch` if the reply
    ///   cannot be normalized
    pub async fn generate(
        &self,
        instruction: &str,
        target_markup: &str,
    ) -> Result<GeneratedCode, GenerationError> {
        let request = GenerationRequest::new(instruction, target_markup)?;
        self.generate_request(&request).await
    }

    /// Generate from an already validated request.
    #[instrument(
        skip_all,
        fields(
            provider = self.transport.provider_name(),
            model = %self.transport.model_name(),
            instruction_len = request.instruction().len(),
            markup_len = request.target_markup().len(),
        )
    )]
    pub async fn generate_request(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedCode, GenerationError> {
        let Some(api_key) = self.credentials.credential() else {
            warn!(key = self.credentials.key_name(), "No API key configured");
            return Err(GenerationError::new(GenerationErrorKind::MissingCredential(
                self.credentials.key_name().to_string(),
            )));
        };

        let prompt = build_prompt(request);
        debug!(prompt_len = prompt.len(), "Assembled prompt");

        let raw = self.transport.invoke(&api_key, &prompt).await.map_err(|e| {
            warn!(error = %e, "Model call failed");
            GenerationError::from(e)
        })?;
        debug!(response_len = raw.text().len(), "Received model response");

        let code = normalize(&raw)?;
        info!(
            html_len = code.html().len(),
            css_len = code.css().len(),
            "Generated code"
        );
        Ok(code)
    }

    /// Get a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get a reference to the credential source.
    pub fn credentials(&self) -> &C {
        &self.credentials
    }
}
