//! Tests for the shared-pointer forwarding impls.

use aiblock_core::{ApiKey, RawModelResponse};
use aiblock_error::TransportError;
use aiblock_interface::{CredentialSource, TextGenerator};
use async_trait::async_trait;
use std::sync::Arc;

struct EchoGenerator;

#[async_trait]
impl TextGenerator for EchoGenerator {
    async fn invoke(
        &self,
        api_key: &ApiKey,
        prompt: &str,
    ) -> Result<RawModelResponse, TransportError> {
        Ok(RawModelResponse::new(format!("{}:{}", api_key.expose(), prompt)))
    }

    fn provider_name(&self) -> &'static str {
        "echo"
    }

    fn model_name(&self) -> &str {
        "echo-1"
    }
}

struct FixedCredential;

impl CredentialSource for FixedCredential {
    fn credential(&self) -> Option<ApiKey> {
        ApiKey::new("k")
    }

    fn key_name(&self) -> &str {
        "gemini_api_key"
    }
}

#[tokio::test]
async fn test_arc_generator_forwards() {
    let generator: Arc<dyn TextGenerator> = Arc::new(EchoGenerator);
    let key = ApiKey::new("k").expect("Non-blank key");

    let reply = generator.invoke(&key, "hello").await.expect("Echo succeeds");

    assert_eq!(reply.text(), "k:hello");
    assert_eq!(generator.provider_name(), "echo");
    assert_eq!(generator.model_name(), "echo-1");
}

#[test]
fn test_arc_credential_forwards() {
    let source = Arc::new(FixedCredential);

    assert_eq!(source.credential().map(|k| k.expose().to_string()), Some("k".to_string()));
    assert_eq!(source.key_name(), "gemini_api_key");
}
