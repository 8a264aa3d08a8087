use aiblock_error::{
    AiblockError, AiblockErrorKind, CliError, ConfigError, GenerationError, GenerationErrorKind,
    TransportError, TransportErrorKind,
};

#[test]
fn test_missing_credential_message_names_key() {
    let err = GenerationError::new(GenerationErrorKind::MissingCredential(
        "gemini_api_key".to_string(),
    ));

    assert!(err.kind().is_user_actionable());
    let message = err.user_message();
    assert!(message.contains("gemini_api_key"));
    assert_eq!(
        message,
        "Gemini API key is not set. Configure `gemini_api_key` and try again."
    );

    let from_env = GenerationErrorKind::MissingCredential("GEMINI_API_KEY".to_string());
    assert!(!from_env.user_message().contains("AIBLOCK_"));
}

#[test]
fn test_non_configuration_errors_share_generic_message() {
    let kinds = [
        GenerationErrorKind::NoJsonObjectFound,
        GenerationErrorKind::MalformedJson("eof".to_string()),
        GenerationErrorKind::SchemaMismatch("missing field `css`".to_string()),
        GenerationErrorKind::Transport(TransportErrorKind::Request("timeout".to_string())),
    ];

    for kind in kinds {
        assert!(!kind.is_user_actionable(), "{kind} should not be actionable");
        assert_eq!(kind.user_message(), "Code generation failed. Please try again.");
    }
}

#[test]
fn test_display_keeps_detail_for_logging() {
    let err = GenerationError::new(GenerationErrorKind::MalformedJson(
        "expected `,` at line 1 column 9".to_string(),
    ));
    let rendered = err.to_string();

    assert!(rendered.starts_with("Generation Error: Malformed JSON"));
    assert!(rendered.contains("line 1 column 9"));
    assert!(rendered.contains("error_test.rs"));
}

#[test]
fn test_location_is_captured_at_call_site() {
    let line = line!() + 1;
    let err = GenerationError::new(GenerationErrorKind::NoJsonObjectFound);

    assert_eq!(err.line, line);
    assert!(err.file.ends_with("error_test.rs"));
}

#[test]
fn test_transport_error_converts_into_generation_error() {
    let transport = TransportError::new(TransportErrorKind::HttpStatus {
        status_code: 503,
        message: "overloaded".to_string(),
    });

    let err: GenerationError = transport.into();

    assert_eq!(
        err.kind(),
        &GenerationErrorKind::Transport(TransportErrorKind::HttpStatus {
            status_code: 503,
            message: "overloaded".to_string(),
        })
    );
}

#[test]
fn test_aiblock_error_wraps_kinds() {
    let err: AiblockError = ConfigError::new("bad toml").into();
    assert!(matches!(err.kind(), AiblockErrorKind::Config(_)));
    assert!(err.to_string().contains("bad toml"));

    let err: AiblockError = GenerationError::new(GenerationErrorKind::NoJsonObjectFound).into();
    assert!(matches!(err.kind(), AiblockErrorKind::Generation(_)));

    let err: AiblockError = CliError::new("Failed to read 'in.html'").into();
    assert!(matches!(err.kind(), AiblockErrorKind::Cli(_)));
    assert!(err.to_string().contains("in.html"));
}
