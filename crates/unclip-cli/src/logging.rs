//! Structured logging setup.

use anyhow::Result;
use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Initializes the global tracing subscriber.
///
/// Events go to stderr. Verbosity maps 0 → info, 1 → debug, 2+ → trace;
/// a `RUST_LOG` environment filter overrides the mapping when set.
pub fn init(format: LogFormat, verbosity: u8) -> Result<()> {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let result = match format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    result.map_err(|err| anyhow!("failed to initialize logging: {err}"))
}
