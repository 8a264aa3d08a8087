use aiblock_core::{ApiKey, GeneratedCode, GenerationRequest, RawModelResponse};
use aiblock_error::GenerationErrorKind;

#[test]
fn test_request_keeps_text_verbatim() {
    let request = GenerationRequest::new("  モダンなカードデザインにして ", "\n<div>hi</div>\n")
        .expect("Valid request");

    assert_eq!(request.instruction(), "  モダンなカードデザインにして ");
    assert_eq!(request.target_markup(), "\n<div>hi</div>\n");
}

#[test]
fn test_request_rejects_blank_markup() {
    let err = GenerationRequest::new("Make it blue", " \t\n").unwrap_err();

    match err.kind() {
        GenerationErrorKind::InvalidRequest(msg) => assert!(msg.contains("markup")),
        other => panic!("Expected InvalidRequest, got {:?}", other),
    }
}

#[test]
fn test_request_rejects_blank_instruction() {
    let err = GenerationRequest::new("", "<p>x</p>").unwrap_err();
    assert!(matches!(err.kind(), GenerationErrorKind::InvalidRequest(_)));
}

#[test]
fn test_api_key_trims_and_rejects_blank() {
    assert!(ApiKey::new("   ").is_none());
    assert_eq!(ApiKey::new(" key \n").expect("Valid key").expose(), "key");
}

#[test]
fn test_api_key_debug_is_redacted() {
    let key = ApiKey::new("super-secret-value").expect("Valid key");
    let rendered = format!("{:?}", key);
    assert!(!rendered.contains("super-secret-value"));
}

#[test]
fn test_generated_code_requires_both_keys() {
    let missing = serde_json::from_str::<GeneratedCode>(r#"{"html": "<p></p>"}"#);
    assert!(missing.is_err());

    let wrong_type = serde_json::from_str::<GeneratedCode>(r#"{"html": 1, "css": ""}"#);
    assert!(wrong_type.is_err());
}

#[test]
fn test_generated_code_allows_empty_values() {
    let code: GeneratedCode =
        serde_json::from_str(r#"{"html": "", "css": ""}"#).expect("Valid code");
    let (html, css) = code.into_parts();
    assert!(html.is_empty());
    assert!(css.is_empty());
}

#[test]
fn test_raw_response_from_str() {
    let raw = RawModelResponse::from("```json\n{}\n```");
    assert_eq!(raw.text(), "```json\n{}\n```");
}
