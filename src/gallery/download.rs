//! Image downloading for the gallery pipeline.

use std::path::Path;
use std::time::Duration;

use tracing::{info, warn};
use url::Url;

use crate::error::ScrapeError;
use crate::fetcher::HttpFetcher;

/// Downloads each URL into `folder` as `<query>_<n>.jpg` (1-indexed),
/// creating the folder if needed.
///
/// A failing image is logged and skipped; the rest are still downloaded.
/// Returns the number of files written.
pub async fn download_images(
    urls: &[String],
    folder: &Path,
    query: &str,
    timeout: Duration,
) -> Result<usize, ScrapeError> {
    tokio::fs::create_dir_all(folder).await?;
    let fetcher = HttpFetcher::new(timeout)?;

    let mut saved = 0;
    for (index, raw_url) in urls.iter().enumerate() {
        let name = format!("{}_{}.jpg", query, index + 1);
        match save_one(&fetcher, raw_url, &folder.join(&name)).await {
            Ok(()) => {
                info!(file = %name, "image saved");
                saved += 1;
            }
            Err(error) => warn!(url = %raw_url, %error, "image download failed, skipped"),
        }
    }
    Ok(saved)
}

async fn save_one(fetcher: &HttpFetcher, raw_url: &str, target: &Path) -> Result<(), ScrapeError> {
    let url = Url::parse(raw_url)?;
    let bytes = fetcher.fetch_bytes(&url).await?;
    tokio::fs::write(target, &bytes).await?;
    Ok(())
}
