//! # Collector Module
//!
//! Orchestrates the fetch/aggregate phase of the collection pipeline.
//!
//! ## Overview
//!
//! The `Collector` resolves the total page count from the landing page,
//! creates one fetch future per page index, and joins them with a
//! deterministic fan-in barrier. Failures degrade locally: a failed landing
//! page means zero pages, a failed page contributes an empty record list,
//! and an incomplete article block is skipped inside the parse step. No
//! failure mode aborts sibling work.
//!
//! ## Ordering
//!
//! Results are joined in the order the futures were created, so page 1's
//! records always precede page 2's regardless of completion order.

use futures_util::future::join_all;
use tracing::{info, warn};
use url::Url;

use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::fetcher::PageFetcher;
use crate::parse::PageExtractor;
use crate::record::Anecdote;
use crate::stats::ScrapeStats;

/// Drives the fan-out collection of anecdote pages.
pub struct Collector<'a, F: PageFetcher> {
    fetcher: &'a F,
    base_url: Url,
    extractor: PageExtractor,
    stats: ScrapeStats,
}

impl<'a, F: PageFetcher> Collector<'a, F> {
    /// Builds a collector around an existing fetcher session.
    pub fn new(fetcher: &'a F, config: &ScraperConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            fetcher,
            base_url: Url::parse(&config.base_url)?,
            extractor: PageExtractor::new()?,
            stats: ScrapeStats::new(),
        })
    }

    /// Resolves the total page count from the landing page.
    ///
    /// Any failure degrades to zero pages: the collection becomes a no-op
    /// rather than an error.
    pub async fn resolve_page_count(&self) -> u32 {
        let html = match self.fetcher.fetch_html(&self.base_url).await {
            Ok(html) => html,
            Err(error) => {
                warn!(%error, "landing page fetch failed, treating as zero pages");
                return 0;
            }
        };
        match self.extractor.total_pages(&html) {
            Some(total) => {
                info!(total, "resolved page count");
                total
            }
            None => {
                warn!("pagination element missing or not numeric, treating as zero pages");
                0
            }
        }
    }

    /// Fetches and extracts one page.
    async fn fetch_page(&self, page: u32) -> Result<Vec<Anecdote>, ScrapeError> {
        let url = self.base_url.join(&format!("page/{page}/"))?;
        self.stats.increment_pages_requested();
        let html = self.fetcher.fetch_html(&url).await?;
        self.stats.increment_pages_fetched();
        self.stats.add_bytes_downloaded(html.len());
        let extracted = self.extractor.anecdotes(&html);
        self.stats.add_records_extracted(extracted.records.len());
        self.stats.add_blocks_skipped(extracted.skipped_blocks);
        info!(page, count = extracted.records.len(), "page extracted");
        Ok(extracted.records)
    }

    /// Collects every page's records.
    ///
    /// All fetch futures are created up front and joined together; a failing
    /// page has its reason logged and contributes an empty list without
    /// aborting its siblings.
    pub async fn collect_all(&self) -> Vec<Anecdote> {
        let total = self.resolve_page_count().await;
        if total == 0 {
            warn!("no pages to collect");
            return Vec::new();
        }

        let fetches: Vec<_> = (1..=total).map(|page| self.fetch_page(page)).collect();
        let outcomes = join_all(fetches).await;

        let mut records = Vec::new();
        for (index, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(page_records) => records.extend(page_records),
                Err(error) => {
                    warn!(page = index + 1, %error, "page failed, contributing no records");
                    self.stats.increment_pages_failed();
                }
            }
        }
        info!(pages = total, records = records.len(), "collection finished");
        records
    }

    /// Counters for the current run.
    pub fn stats(&self) -> &ScrapeStats {
        &self.stats
    }
}
