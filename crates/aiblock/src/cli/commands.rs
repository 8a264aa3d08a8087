//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Restyle HTML snippets with Gemini.
#[derive(Parser, Debug)]
#[command(name = "aiblock")]
#[command(about = "Restyle HTML snippets with Gemini")]
#[command(version)]
pub struct Cli {
    /// Path to settings file (defaults to ./aiblock.toml or the user config dir)
    #[arg(long, global = true, env = "AIBLOCK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate restyled HTML and CSS
    Generate {
        /// What to change, in natural language
        #[arg(short, long)]
        instruction: String,

        /// File holding the HTML to transform (reads stdin when omitted)
        #[arg(long)]
        html: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Print the prompt that would be sent, without calling the API
    Prompt {
        /// What to change, in natural language
        #[arg(short, long)]
        instruction: String,

        /// File holding the HTML to transform (reads stdin when omitted)
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// Validate saved model output as an html/css pair
    Normalize {
        /// File holding the raw model reply (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Show effective settings with the API key masked
    Config,
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Readable text
    #[default]
    Human,
    /// JSON
    Json,
}
