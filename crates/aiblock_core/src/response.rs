//! Raw and validated model output.

use serde::{Deserialize, Serialize};

/// Unprocessed text returned by the model call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawModelResponse {
    text: String,
}

impl RawModelResponse {
    /// Wraps response text exactly as received.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<String> for RawModelResponse {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for RawModelResponse {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Validated HTML/CSS pair produced by the model.
///
/// There is no public constructor: the only way to obtain one is to
/// deserialize a JSON object holding exactly the string keys `html` and
/// `css`. Either value may be empty.
///
/// # Examples
///
/// ```
/// use aiblock_core::GeneratedCode;
///
/// let code: GeneratedCode =
///     serde_json::from_str(r#"{"html": "<p>x</p>", "css": "p{color:red}"}"#).unwrap();
/// assert_eq!(code.html(), "<p>x</p>");
///
/// let extra = serde_json::from_str::<GeneratedCode>(r#"{"html": "", "css": "", "js": ""}"#);
/// assert!(extra.is_err());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(deny_unknown_fields)]
pub struct GeneratedCode {
    /// The transformed markup
    html: String,
    /// Stylesheet decorating the markup
    css: String,
}

impl GeneratedCode {
    /// Splits into `(html, css)`.
    pub fn into_parts(self) -> (String, String) {
        (self.html, self.css)
    }
}
