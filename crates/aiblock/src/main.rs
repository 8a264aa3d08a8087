//! aiblock command-line entry point.

use aiblock::cli::{Cli, run};
use aiblock::init_tracing;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs)?;
    tracing::debug!(command = ?cli.command, "Starting aiblock");

    let code = run(cli).await?;
    Ok(code)
}
