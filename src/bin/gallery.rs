//! Gallery binary: run the browser-driven image pipeline once per query.
//!
//! Queries come from the command line; with no arguments a default set is
//! used. Each query downloads into its own `images_<query>` directory.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use tracing::{error, info};

use anekdot_scraper::{gallery, logging, GalleryConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init(None)?;
    let config = GalleryConfig::default();

    let mut queries: Vec<String> = env::args().skip(1).collect();
    if queries.is_empty() {
        queries = ["nature", "technology", "people"]
            .map(String::from)
            .to_vec();
    }

    for query in &queries {
        let folder = PathBuf::from(format!("images_{query}"));
        match gallery::run(&config, query, &folder).await {
            Ok(report) => info!(
                query = %query,
                found = report.images_found,
                saved = report.images_saved,
                "gallery run finished"
            ),
            Err(err) => error!(query = %query, %err, "gallery run failed"),
        }
    }
    Ok(())
}
