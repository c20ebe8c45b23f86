//! Logging setup for the command line tool.
//!
//! The library only emits `tracing` events.
//! A binary that wants to see them calls [`init`] once.
use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};


const DEFAULT_FILTER: &str = "warn";

static INITIALIZED: OnceLock<()> = OnceLock::new();


/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// Failed to set the global tracing subscriber.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(tracing::subscriber::SetGlobalDefaultError),
}


/// Install a subscriber that writes to stderr.
///
/// The level is read from `RUST_LOG` and defaults to `warn`.
/// Subsequent calls are no-ops.
pub fn init() -> Result<(), LoggingError> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let subscriber = Registry::default()
        .with(env_filter)
        .with(stderr_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(LoggingError::SetGlobal)?;
    let _ = INITIALIZED.set(());

    tracing::debug!("Logging initialized");
    Ok(())
}
