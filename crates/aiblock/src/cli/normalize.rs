//! Normalize command handler.

use super::{OutputFormat, print_code, read_input, to_pretty_json};
use aiblock_codegen::normalize;
use aiblock_core::RawModelResponse;
use aiblock_error::AiblockResult;
use std::path::Path;

/// Runs saved model output through the normalizer.
///
/// Unlike `generate`, failures print the detailed classification rather than
/// the user-facing message, since this command exists for debugging replies.
pub fn handle_normalize_command(input: Option<&Path>, format: OutputFormat) -> AiblockResult<bool> {
    let raw = RawModelResponse::new(read_input(input)?);

    match normalize(&raw) {
        Ok(code) => {
            print_code(code.html(), code.css(), format)?;
            Ok(true)
        }
        Err(e) => {
            match format {
                OutputFormat::Human => eprintln!("{}", e.kind()),
                OutputFormat::Json => {
                    let value = serde_json::json!({ "error": e.kind().to_string() });
                    println!("{}", to_pretty_json(&value)?);
                }
            }
            Ok(false)
        }
    }
}
