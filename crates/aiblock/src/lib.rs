//! Restyle HTML snippets with Gemini.
//!
//! aiblock takes a piece of HTML and a natural-language styling instruction,
//! asks a Gemini model for a rewritten snippet plus a stylesheet, and
//! validates the reply into a [`GeneratedCode`] pair.
//!
//! This crate re-exports the workspace crates and adds the host pieces:
//! layered [`Settings`], the [`Panel`] lifecycle host, logging setup, and
//! the `aiblock` CLI.
//!
//! # Example
//!
//! ```no_run
//! use aiblock::{CodeGenerator, Settings};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::load(None)?;
//! let generator = CodeGenerator::new(settings.gemini_client()?, settings);
//!
//! let code = generator
//!     .generate("Turn this into a modern card", "<div>hi</div>")
//!     .await?;
//! println!("{}\n{}", code.html(), code.css());
//! # Ok(())
//! # }
//! ```

pub mod cli;
mod logging;
mod panel;
mod settings;

pub use logging::init_tracing;
pub use panel::{Panel, PanelCommand, PanelEvent, PanelState, PanelView};
pub use settings::Settings;

pub use aiblock_codegen::{
    CodeGenerator, EnvCredential, StaticCredential, build_prompt, normalize,
};
pub use aiblock_core::{ApiKey, GeneratedCode, GenerationRequest, RawModelResponse};
pub use aiblock_error::{
    AiblockError, AiblockErrorKind, AiblockResult, CliError, ConfigError, GenerationError,
    GenerationErrorKind, TransportError, TransportErrorKind,
};
pub use aiblock_interface::{CredentialSource, TextGenerator};
pub use aiblock_models::{GeminiClient, GenerationConfig};
