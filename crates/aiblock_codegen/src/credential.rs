//! Simple credential sources.

use aiblock_core::ApiKey;
use aiblock_interface::CredentialSource;

/// Reads the API key from an environment variable on every lookup.
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    /// Read from the named variable.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialSource for EnvCredential {
    fn credential(&self) -> Option<ApiKey> {
        std::env::var(&self.var).ok().and_then(ApiKey::new)
    }

    fn key_name(&self) -> &str {
        &self.var
    }
}

/// A fixed, possibly absent, credential.
#[derive(Debug, Clone)]
pub struct StaticCredential {
    key_name: String,
    key: Option<ApiKey>,
}

impl StaticCredential {
    /// Credential `key` reported under `key_name`; blank keys count as absent.
    pub fn new(key_name: impl Into<String>, key: Option<&str>) -> Self {
        Self {
            key_name: key_name.into(),
            key: key.and_then(ApiKey::new),
        }
    }
}

impl CredentialSource for StaticCredential {
    fn credential(&self) -> Option<ApiKey> {
        self.key.clone()
    }

    fn key_name(&self) -> &str {
        &self.key_name
    }
}
