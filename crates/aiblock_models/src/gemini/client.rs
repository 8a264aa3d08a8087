//! Gemini REST client.

use crate::gemini::{ApiErrorResponse, GenerateContentResponse, GenerationConfig, conversions};
use aiblock_core::{ApiKey, RawModelResponse};
use aiblock_error::{TransportError, TransportErrorKind};
use aiblock_interface::TextGenerator;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Default model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default REST endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for Gemini's `generateContent` endpoint.
///
/// The API key is not stored on the client; it is passed to every
/// [`TextGenerator::invoke`] call.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    model: String,
    base_url: String,
    generation_config: Option<GenerationConfig>,
}

impl GeminiClient {
    /// Creates a client for `model` against the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(model: impl Into<String>) -> Result<Self, TransportError> {
        Self::new_with_url(model, DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom endpoint root.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    #[instrument(skip_all)]
    pub fn new_with_url(
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, TransportError> {
        let model = model.into();
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let client = Client::builder()
            .user_agent(concat!("aiblock/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                TransportError::new(TransportErrorKind::ClientCreation(e.to_string()))
            })?;

        debug!(model = %model, url = %base_url, "Created Gemini client");

        Ok(Self {
            client,
            model,
            base_url,
            generation_config: None,
        })
    }

    /// Sets sampling options sent with every request.
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }

    /// Full URL of the `generateContent` call for this model.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, api_key, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn invoke(
        &self,
        api_key: &ApiKey,
        prompt: &str,
    ) -> Result<RawModelResponse, TransportError> {
        let request = conversions::to_request(prompt, self.generation_config.as_ref())?;

        debug!(model = %self.model, "Sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                TransportError::new(TransportErrorKind::Request(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            error!(status = %status, error = %message, "Gemini API error");

            return Err(TransportError::new(TransportErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message,
            }));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            TransportError::new(TransportErrorKind::Decode(e.to_string()))
        })?;

        debug!(
            candidates = body.candidates.len(),
            total_tokens = ?body.usage_metadata.as_ref().and_then(|u| u.total_token_count),
            "Received response"
        );

        conversions::from_response(&body)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
