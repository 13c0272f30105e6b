//! Process-boundary tracing setup.
//!
//! Binaries call `init` exactly once before any component runs; library
//! code only emits through the `tracing` macros and never configures the
//! subscriber itself.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::ScrapeError;

/// Initializes the global subscriber: console output plus an optional
/// append-mode log file. `RUST_LOG` overrides the `info` default.
pub fn init(log_file: Option<&Path>) -> Result<(), ScrapeError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = tracing_subscriber::fmt::layer();

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let file_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file));
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(file_layer)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();
        }
    }
    Ok(())
}
