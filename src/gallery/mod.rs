//! # Gallery Module
//!
//! The browser-driven image pipeline: load an image-search page, submit a
//! query, scroll to trigger lazy loading, collect image URLs, and download
//! them to disk. Fully sequential; the only background activity is the CDP
//! event handler the browser connection requires.

mod browser;
mod download;

pub use browser::ImageCollector;
pub use download::download_images;

use std::path::Path;

use tracing::{info, warn};

use crate::config::GalleryConfig;
use crate::error::ScrapeError;

/// Outcome of one gallery run.
#[derive(Debug)]
pub struct GalleryReport {
    pub images_found: usize,
    pub images_saved: usize,
}

/// Runs the full image pipeline for one search query.
///
/// Browser failures are fatal for the run; individual image downloads that
/// fail are logged and skipped inside `download_images`.
pub async fn run(
    config: &GalleryConfig,
    query: &str,
    folder: &Path,
) -> Result<GalleryReport, ScrapeError> {
    let collector = ImageCollector::launch(config).await?;
    let collected = collector.collect(query).await;
    if let Err(error) = collector.close().await {
        warn!(%error, "browser shutdown failed");
    }
    let urls = collected?;
    info!(query, found = urls.len(), "image urls collected");

    let images_saved = download_images(&urls, folder, query, config.request_timeout).await?;
    Ok(GalleryReport {
        images_found: urls.len(),
        images_saved,
    })
}
