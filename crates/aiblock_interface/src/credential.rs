//! Credential lookup capability.

use aiblock_core::ApiKey;

/// Looks up the API key under a fixed settings key.
pub trait CredentialSource: Send + Sync {
    /// Current credential, or `None` when it is unset or blank.
    ///
    /// Called once per generation so that settings changes take effect
    /// without rebuilding the generator.
    fn credential(&self) -> Option<ApiKey>;

    /// Name of the settings key the credential is read from.
    fn key_name(&self) -> &str;
}

impl<T: CredentialSource + ?Sized> CredentialSource for std::sync::Arc<T> {
    fn credential(&self) -> Option<ApiKey> {
        (**self).credential()
    }

    fn key_name(&self) -> &str {
        (**self).key_name()
    }
}
