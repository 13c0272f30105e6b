//! Error type shared across the fetch, extraction, storage, and browser
//! layers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for fetch, extraction, storage, and browser failures.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("record file {path}: {source}")]
    RecordFile {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("browser failure: {0}")]
    Browser(String),
    #[error(transparent)]
    Cdp(#[from] chromiumoxide::error::CdpError),
    #[error("configuration error: {0}")]
    Configuration(String),
}
