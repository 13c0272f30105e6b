//! Configuration for both pipelines.
//!
//! Plain structs with defaults; components that need validated forms (parsed
//! URLs, compiled selectors) build them at construction time and surface
//! errors there.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the anecdote collection pipeline.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Base location of the site; page N lives at `<base_url>page/<N>/`.
    pub base_url: String,
    /// Path of the delimited record file.
    pub output_path: PathBuf,
    /// Column delimiter of the record file.
    pub delimiter: u8,
    /// Maximum number of results returned by the keyword filter.
    pub search_limit: usize,
    /// Per-request timeout; a page exceeding it degrades to an empty result
    /// instead of stalling the whole batch.
    pub request_timeout: Duration,
    /// Append-mode log file; `None` logs to the console only.
    pub log_path: Option<PathBuf>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: "https://anekdotov.me/".to_string(),
            output_path: PathBuf::from("res.csv"),
            delimiter: b';',
            search_limit: 5,
            request_timeout: Duration::from_secs(30),
            log_path: Some(PathBuf::from("anekdot_scraper.log")),
        }
    }
}

/// Configuration for the browser-driven image gallery pipeline.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub start_url: String,
    /// CSS selector of the search input on the start page.
    pub search_input: String,
    /// CSS selector matching loaded gallery images.
    pub image_selector: String,
    /// How many times the window is scrolled to trigger lazy loading.
    pub scroll_rounds: usize,
    pub scroll_step_px: u32,
    /// Pause after each scroll so lazy-loaded images can appear.
    pub scroll_pause: Duration,
    /// Pause after submitting the search before scrolling starts.
    pub settle_pause: Duration,
    /// Cap on collected image URLs per query.
    pub max_images: usize,
    pub request_timeout: Duration,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            start_url: "https://unsplash.com/".to_string(),
            search_input: "input[name='searchKeyword']".to_string(),
            image_selector: "img._2zEKz".to_string(),
            scroll_rounds: 5,
            scroll_step_px: 1000,
            scroll_pause: Duration::from_secs(2),
            settle_pause: Duration::from_secs(3),
            max_images: 25,
            request_timeout: Duration::from_secs(30),
        }
    }
}
