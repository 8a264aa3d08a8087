//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the aiblock binary.

mod commands;
mod generate;
mod normalize;
mod prompt;

pub use commands::{Cli, Commands, OutputFormat};
pub use generate::handle_generate_command;
pub use normalize::handle_normalize_command;
pub use prompt::handle_prompt_command;

use crate::Settings;
use aiblock_error::{AiblockResult, CliError};
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

/// Run the parsed command line.
///
/// Returns `ExitCode::FAILURE` when the command ran but did not produce a
/// result (e.g. generation failed); errors are reserved for problems such
/// as unreadable input or invalid settings.
pub async fn run(cli: Cli) -> AiblockResult<ExitCode> {
    let succeeded = match cli.command {
        Commands::Generate {
            instruction,
            html,
            format,
        } => {
            let settings = Settings::load(cli.config.as_deref())?;
            handle_generate_command(settings, instruction, html.as_deref(), format).await?
        }
        Commands::Prompt { instruction, html } => {
            handle_prompt_command(&instruction, html.as_deref())?
        }
        Commands::Normalize { input, format } => {
            handle_normalize_command(input.as_deref(), format)?
        }
        Commands::Config => {
            let settings = Settings::load(cli.config.as_deref())?;
            print!("{}", settings.to_redacted_toml()?);
            true
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Read a file, or stdin when `path` is `None`.
pub(crate) fn read_input(path: Option<&Path>) -> AiblockResult<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            CliError::new(format!("Failed to read '{}': {}", path.display(), e)).into()
        }),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| CliError::new(format!("Failed to read stdin: {}", e)))?;
            Ok(buffer)
        }
    }
}

/// Print a generated html/css pair.
pub(crate) fn print_code(html: &str, css: &str, format: OutputFormat) -> AiblockResult<()> {
    match format {
        OutputFormat::Human => {
            println!("<!-- html -->\n{}\n\n/* css */\n{}", html, css);
        }
        OutputFormat::Json => {
            let value = serde_json::json!({ "html": html, "css": css });
            println!("{}", to_pretty_json(&value)?);
        }
    }
    Ok(())
}

pub(crate) fn to_pretty_json<T: serde::Serialize>(value: &T) -> AiblockResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::new(format!("Failed to serialize output: {}", e)).into())
}
