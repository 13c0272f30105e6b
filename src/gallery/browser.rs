//! Headless-browser driving for the gallery pipeline.
//!
//! The page exposes no load-complete signal for its lazy-loaded results, so
//! fixed pauses stand in for readiness checks after the search submit and
//! after each scroll step.

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures_util::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::GalleryConfig;
use crate::error::ScrapeError;

/// Owns the headless browser, its CDP event handler task, and the single
/// page the pipeline drives.
pub struct ImageCollector<'a> {
    config: &'a GalleryConfig,
    browser: Browser,
    handler: JoinHandle<()>,
    page: Page,
}

impl<'a> ImageCollector<'a> {
    /// Launches the browser and opens the start page.
    pub async fn launch(config: &'a GalleryConfig) -> Result<Self, ScrapeError> {
        let browser_config = BrowserConfig::builder()
            .build()
            .map_err(ScrapeError::Browser)?;
        let (browser, mut events) = Browser::launch(browser_config).await?;
        let handler = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser.new_page(config.start_url.as_str()).await?;
        page.wait_for_navigation().await?;
        info!(url = %config.start_url, "start page loaded");

        Ok(Self {
            config,
            browser,
            handler,
            page,
        })
    }

    /// Submits the query, scrolls the results, and returns up to
    /// `max_images` image URLs in document order.
    pub async fn collect(&self, query: &str) -> Result<Vec<String>, ScrapeError> {
        let input = self
            .page
            .find_element(self.config.search_input.as_str())
            .await?;
        input.click().await?;
        input.type_str(query).await?;
        input.press_key("Enter").await?;
        sleep(self.config.settle_pause).await;

        for round in 0..self.config.scroll_rounds {
            self.page
                .evaluate(format!("window.scrollBy(0, {});", self.config.scroll_step_px))
                .await?;
            debug!(round, "scrolled result page");
            sleep(self.config.scroll_pause).await;
        }

        let elements = self
            .page
            .find_elements(self.config.image_selector.as_str())
            .await?;
        let mut urls = Vec::new();
        for element in elements.into_iter().take(self.config.max_images) {
            match element.attribute("src").await? {
                Some(src) if !src.is_empty() => urls.push(src),
                _ => debug!("image element without src, skipped"),
            }
        }
        Ok(urls)
    }

    /// Shuts the browser down and drains the event handler task.
    pub async fn close(mut self) -> Result<(), ScrapeError> {
        self.browser.close().await?;
        self.browser.wait().await?;
        if let Err(error) = self.handler.await {
            warn!(%error, "browser event handler aborted");
        }
        Ok(())
    }
}
