//! API credential wrapper.

/// A non-blank API key.
///
/// `Debug` never prints the secret.
///
/// # Examples
///
/// ```
/// use aiblock_core::ApiKey;
///
/// let key = ApiKey::new("AIza-secret").unwrap();
/// assert_eq!(key.expose(), "AIza-secret");
/// assert!(!format!("{:?}", key).contains("secret"));
///
/// assert!(ApiKey::new("").is_none());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a key, returning `None` when it is empty or whitespace.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == key.len() {
            Some(Self(key))
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The secret value, for placing in request headers.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(****)")
    }
}
