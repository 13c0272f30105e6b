//! # Statistics Module
//!
//! Collects counters describing a single collection run.
//!
//! All counters are monotonic atomics so the fanned-out page futures can
//! update them through a shared reference. The collected numbers are
//! reported once at the end of the run via `Display`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Collects and stores counters about a collection run.
#[derive(Debug)]
pub struct ScrapeStats {
    start_time: Instant,

    pub pages_requested: AtomicUsize,
    pub pages_fetched: AtomicUsize,
    pub pages_failed: AtomicUsize,

    pub records_extracted: AtomicUsize,
    pub blocks_skipped: AtomicUsize,

    pub bytes_downloaded: AtomicUsize,
}

impl ScrapeStats {
    /// Creates a new `ScrapeStats` with all counters at zero.
    pub fn new() -> Self {
        ScrapeStats {
            start_time: Instant::now(),
            pages_requested: AtomicUsize::new(0),
            pages_fetched: AtomicUsize::new(0),
            pages_failed: AtomicUsize::new(0),
            records_extracted: AtomicUsize::new(0),
            blocks_skipped: AtomicUsize::new(0),
            bytes_downloaded: AtomicUsize::new(0),
        }
    }

    pub(crate) fn increment_pages_requested(&self) {
        self.pages_requested.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn increment_pages_fetched(&self) {
        self.pages_fetched.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn increment_pages_failed(&self) {
        self.pages_failed.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn add_records_extracted(&self, count: usize) {
        self.records_extracted.fetch_add(count, Ordering::SeqCst);
    }

    pub(crate) fn add_blocks_skipped(&self, count: usize) {
        self.blocks_skipped.fetch_add(count, Ordering::SeqCst);
    }

    pub(crate) fn add_bytes_downloaded(&self, bytes: usize) {
        self.bytes_downloaded.fetch_add(bytes, Ordering::SeqCst);
    }

    fn formatted_bytes(&self) -> String {
        const KB: usize = 1024;
        const MB: usize = 1024 * KB;

        let total = self.bytes_downloaded.load(Ordering::SeqCst);
        if total >= MB {
            format!("{:.2} MB", total as f64 / MB as f64)
        } else if total >= KB {
            format!("{:.2} KB", total as f64 / KB as f64)
        } else {
            format!("{} B", total)
        }
    }
}

impl Default for ScrapeStats {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ScrapeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\nScrape Statistics")?;
        writeln!(f, "-----------------")?;
        writeln!(f, "  duration : {:?}", self.start_time.elapsed())?;
        writeln!(
            f,
            "  pages    : requested: {}, fetched: {}, failed: {}",
            self.pages_requested.load(Ordering::SeqCst),
            self.pages_fetched.load(Ordering::SeqCst),
            self.pages_failed.load(Ordering::SeqCst)
        )?;
        writeln!(
            f,
            "  records  : extracted: {}, blocks skipped: {}",
            self.records_extracted.load(Ordering::SeqCst),
            self.blocks_skipped.load(Ordering::SeqCst)
        )?;
        writeln!(f, "  network  : downloaded: {}", self.formatted_bytes())
    }
}
