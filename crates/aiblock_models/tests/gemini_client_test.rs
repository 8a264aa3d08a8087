//! Gemini client tests against a mock HTTP server.

#![cfg(feature = "gemini")]

use aiblock_core::ApiKey;
use aiblock_error::TransportErrorKind;
use aiblock_interface::TextGenerator;
use aiblock_models::GeminiClient;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new_with_url("gemini-2.5-flash", format!("{}/v1beta", server.uri()))
        .expect("Client builds")
}

fn key() -> ApiKey {
    ApiKey::new("mock-key").expect("Non-blank key")
}

#[tokio::test]
async fn test_invoke_returns_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("x-goog-api-key", "mock-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [ { "text": "{\"html\":\"<p></p>\",\"css\":\"p{}\"}" } ]
                },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .invoke(&key(), "Make it red")
        .await
        .expect("Call succeeds");

    assert_eq!(response.text(), "{\"html\":\"<p></p>\",\"css\":\"p{}\"}");
}

#[tokio::test]
async fn test_error_envelope_becomes_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {
                "code": 403,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "PERMISSION_DENIED"
            }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .invoke(&key(), "Make it red")
        .await
        .unwrap_err();

    assert_eq!(
        err.kind(),
        &TransportErrorKind::HttpStatus {
            status_code: 403,
            message: "API key not valid. Please pass a valid API key.".to_string(),
        }
    );
}

#[tokio::test]
async fn test_error_without_envelope_keeps_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .invoke(&key(), "Make it red")
        .await
        .unwrap_err();

    assert_eq!(
        err.kind(),
        &TransportErrorKind::HttpStatus {
            status_code: 503,
            message: "upstream unavailable".to_string(),
        }
    );
}

#[tokio::test]
async fn test_non_json_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .invoke(&key(), "Make it red")
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), TransportErrorKind::Decode(_)));
}
