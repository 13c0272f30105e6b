//! # anekdot-scraper
//!
//! Two independent scraping pipelines behind one library.
//!
//! The collection pipeline fetches anecdotes from a paginated site with a
//! concurrent per-page fan-out, persists them to a `;`-delimited record
//! file, and searches that file for a keyword. The gallery pipeline drives
//! a headless browser over an image-search page and downloads the collected
//! images.
//!
//! ## Example
//!
//! ```rust,ignore
//! use anekdot_scraper::{Collector, HttpFetcher, ScraperConfig};
//!
//! async fn collect() -> Result<(), anekdot_scraper::ScrapeError> {
//!     let config = ScraperConfig::default();
//!     let fetcher = HttpFetcher::new(config.request_timeout)?;
//!     let collector = Collector::new(&fetcher, &config)?;
//!     let records = collector.collect_all().await;
//!     anekdot_scraper::storage::write_records(&config.output_path, config.delimiter, &records);
//!     Ok(())
//! }
//! ```

pub mod collector;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod gallery;
pub mod logging;
pub mod parse;
pub mod record;
pub mod search;
pub mod stats;
pub mod storage;

pub use collector::Collector;
pub use config::{GalleryConfig, ScraperConfig};
pub use error::ScrapeError;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use record::Anecdote;
pub use stats::ScrapeStats;
