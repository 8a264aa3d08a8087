//! Layered settings: TOML file plus `AIBLOCK_*` environment variables.

use aiblock_core::ApiKey;
use aiblock_error::{ConfigError, TransportError};
use aiblock_interface::CredentialSource;
use aiblock_models::GenerationConfig;
use aiblock_models::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient};
use config::{Config, Environment, File};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User settings for aiblock.
///
/// # Examples
///
/// ```
/// use aiblock::Settings;
/// use aiblock::CredentialSource;
///
/// let settings = Settings::default();
/// assert_eq!(settings.model(), "gemini-2.5-flash");
/// assert!(settings.credential().is_none());
/// ```
#[derive(Clone, Serialize, Deserialize, Getters)]
pub struct Settings {
    /// Gemini API key
    #[serde(default)]
    #[getter(skip)]
    gemini_api_key: Option<String>,
    /// Model identifier
    #[serde(default = "default_model")]
    model: String,
    /// REST endpoint root
    #[serde(default = "default_api_base_url")]
    api_base_url: String,
    /// Sampling temperature; provider default when unset
    #[serde(default)]
    temperature: Option<f32>,
    /// Cap on generated tokens; provider default when unset
    #[serde(default)]
    max_output_tokens: Option<u32>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            model: default_model(),
            api_base_url: default_api_base_url(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "****"))
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish()
    }
}

impl Settings {
    /// Settings key holding the API credential.
    pub const CREDENTIAL_KEY: &'static str = "gemini_api_key";

    /// Prefix of environment variables that override the file.
    pub const ENV_PREFIX: &'static str = "AIBLOCK";

    /// Settings file name searched in the default locations.
    pub const FILE_NAME: &'static str = "aiblock.toml";

    /// Load settings from `path` (or the default locations) and `AIBLOCK_*`
    /// environment variables.
    ///
    /// An explicit `path` must exist; default locations are optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(path, Some(Self::ENV_PREFIX))
    }

    /// Load settings with a custom environment prefix, or none.
    #[tracing::instrument(skip_all, fields(path = ?path, env_prefix = ?env_prefix))]
    pub fn load_from(path: Option<&Path>, env_prefix: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                for candidate in Self::default_paths() {
                    tracing::debug!(path = %candidate.display(), "Checking settings file");
                    builder = builder.add_source(File::from(candidate).required(false));
                }
            }
        }

        if let Some(prefix) = env_prefix {
            builder = builder.add_source(Environment::with_prefix(prefix));
        }

        let settings: Settings = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| ConfigError::new(format!("Failed to load settings: {}", e)))?;

        tracing::debug!(
            model = %settings.model,
            credential_set = settings.gemini_api_key.is_some(),
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Default settings files, lowest precedence first.
    ///
    /// `<config dir>/aiblock/aiblock.toml`, then `./aiblock.toml`.
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("aiblock").join(Self::FILE_NAME));
        }
        paths.push(PathBuf::from(Self::FILE_NAME));
        paths
    }

    /// Replace the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.gemini_api_key = Some(key.into());
        self
    }

    /// Gemini client configured from these settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn gemini_client(&self) -> Result<GeminiClient, TransportError> {
        let client = GeminiClient::new_with_url(&self.model, &self.api_base_url)?;
        Ok(match self.generation_config() {
            Some(config) => client.with_generation_config(config),
            None => client,
        })
    }

    /// Sampling options to send with requests, if any are set.
    pub fn generation_config(&self) -> Option<GenerationConfig> {
        if self.temperature.is_none() && self.max_output_tokens.is_none() {
            return None;
        }
        Some(GenerationConfig {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        })
    }

    /// Settings as TOML with the API key masked.
    pub fn to_redacted_toml(&self) -> Result<String, ConfigError> {
        let mut redacted = self.clone();
        if redacted.gemini_api_key.is_some() {
            redacted.gemini_api_key = Some("****".to_string());
        }
        toml::to_string_pretty(&redacted)
            .map_err(|e| ConfigError::new(format!("Failed to serialize settings: {}", e)))
    }
}

impl CredentialSource for Settings {
    fn credential(&self) -> Option<ApiKey> {
        self.gemini_api_key.as_deref().and_then(ApiKey::new)
    }

    fn key_name(&self) -> &str {
        Self::CREDENTIAL_KEY
    }
}
