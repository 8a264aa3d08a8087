//! Tracing subscriber setup for the binary.

use aiblock_error::ConfigError;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and defaults to `info`. Output goes to
/// stderr so stdout only carries command results. With `json` set, events
/// are emitted as JSON lines.
pub fn init_tracing(json: bool) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| ConfigError::new(format!("Failed to initialize tracing: {}", e)))
}
