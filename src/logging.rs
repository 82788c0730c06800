//! Diagnostic logging setup
//!
//! User-facing output goes through [`crate::ui`]; this only wires `tracing`
//! events (pipeline progress, ingestion coercions) to stderr.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{ReleaseTreeError, Result};

/// Initialize the global logging subscriber.
///
/// `RUST_LOG` overrides the configured level; `verbose` forces `debug`.
/// Returns an error if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match config.format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| ReleaseTreeError::Logging(e.to_string()))
}
