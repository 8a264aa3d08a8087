//! Prompt command handler.

use super::read_input;
use aiblock_codegen::build_prompt;
use aiblock_core::GenerationRequest;
use aiblock_error::AiblockResult;
use std::path::Path;

/// Prints the assembled prompt. Needs no credential and makes no API call.
pub fn handle_prompt_command(instruction: &str, html: Option<&Path>) -> AiblockResult<bool> {
    let markup = read_input(html)?;
    let request = GenerationRequest::new(instruction, markup)?;
    print!("{}", build_prompt(&request));
    Ok(true)
}
