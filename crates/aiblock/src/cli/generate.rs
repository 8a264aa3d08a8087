//! Generate command handler.

use super::{OutputFormat, print_code, read_input, to_pretty_json};
use crate::{Panel, PanelCommand, PanelEvent, Settings};
use aiblock_codegen::CodeGenerator;
use aiblock_error::AiblockResult;
use std::path::Path;
use tokio::sync::mpsc;

/// Handles the generate command.
///
/// Drives a [`Panel`] exactly as an editor view would: submits one
/// `generate` command, shows a progress line while loading, and prints the
/// final result or error. Returns `false` when no result was produced.
#[tracing::instrument(skip_all, fields(model = %settings.model()))]
pub async fn handle_generate_command(
    settings: Settings,
    instruction: String,
    html: Option<&Path>,
    format: OutputFormat,
) -> AiblockResult<bool> {
    let markup = read_input(html)?;
    let client = settings.gemini_client()?;
    let mut panel = Panel::new(CodeGenerator::new(client, settings));

    let (tx, mut rx) = mpsc::channel(4);
    let progress = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            if event == PanelEvent::ShowLoading && format == OutputFormat::Human {
                eprintln!("Generating...");
            }
        }
    });

    let outcome = panel
        .handle(
            PanelCommand::Generate {
                html: markup,
                prompt: instruction,
            },
            &tx,
        )
        .await;
    drop(tx);
    if let Err(e) = progress.await {
        tracing::warn!(error = %e, "Progress task failed");
    }

    let Some(event) = outcome else {
        eprintln!("Nothing to generate: instruction and HTML must both be non-empty");
        return Ok(false);
    };

    match (&event, format) {
        (PanelEvent::ShowResult { html, css }, _) => {
            print_code(html, css, format)?;
            Ok(true)
        }
        (PanelEvent::ShowError { message }, OutputFormat::Human) => {
            eprintln!("{}", message);
            Ok(false)
        }
        (PanelEvent::ShowError { .. }, OutputFormat::Json) => {
            println!("{}", to_pretty_json(&event)?);
            Ok(false)
        }
        (PanelEvent::ShowLoading, _) => Ok(false),
    }
}
