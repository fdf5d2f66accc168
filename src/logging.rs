use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "music_sync=info";

/// Diagnostic events go to stderr so stdout carries only progress lines.
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .map_err(|e| Error::Config(format!("invalid log filter: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Config(format!("failed to install logger: {}", e)))
}
