//! # Parse Module
//!
//! Knows how to read the site's markup: selector choice and tolerant
//! extraction live here, nothing else. Higher layers decide when to fetch
//! and what to do with the records.
//!
//! Selectors are compiled once at construction; an invalid selector is a
//! construction-time error, not a per-page one.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::error::ScrapeError;
use crate::record::Anecdote;

/// Pagination element carrying the total page count.
pub const TOTAL_PAGES_SELECTOR: &str = "div.pagination span.total-pages";
/// Blocks holding one anecdote each.
pub const ARTICLE_SELECTOR: &str = "article";
/// Anecdote body inside an article block.
pub const BODY_SELECTOR: &str = "p.short-desc";
/// Category link inside an article block.
pub const CATEGORY_SELECTOR: &str = "a[rel='nofollow']";

/// Compiled selector set for the site's markup.
pub struct PageExtractor {
    total_pages: Selector,
    article: Selector,
    body: Selector,
    category: Selector,
}

/// Records pulled from one page, plus the number of article blocks skipped
/// because a field was missing.
#[derive(Debug, Default)]
pub struct ExtractedPage {
    pub records: Vec<Anecdote>,
    pub skipped_blocks: usize,
}

impl PageExtractor {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            total_pages: compile(TOTAL_PAGES_SELECTOR)?,
            article: compile(ARTICLE_SELECTOR)?,
            body: compile(BODY_SELECTOR)?,
            category: compile(CATEGORY_SELECTOR)?,
        })
    }

    /// Extracts the total page count from the landing page.
    ///
    /// Returns `None` when the pagination element is absent or its text is
    /// not numeric; the caller treats that as zero pages.
    pub fn total_pages(&self, html: &str) -> Option<u32> {
        let document = Html::parse_document(html);
        let element = document.select(&self.total_pages).next()?;
        element_text(element).parse().ok()
    }

    /// Extracts every complete anecdote block on a page.
    ///
    /// A block missing its body or category is skipped on its own; the rest
    /// of the page is still scanned.
    pub fn anecdotes(&self, html: &str) -> ExtractedPage {
        let document = Html::parse_document(html);
        let mut page = ExtractedPage::default();
        for block in document.select(&self.article) {
            let category = block.select(&self.category).next().map(element_text);
            let body = block.select(&self.body).next().map(element_text);
            match (category, body) {
                (Some(category), Some(body)) => page.records.push(Anecdote { category, body }),
                _ => {
                    warn!("article block missing category or body, skipped");
                    page.skipped_blocks += 1;
                }
            }
        }
        page
    }
}

fn compile(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector)
        .map_err(|e| ScrapeError::Configuration(format!("selector `{selector}`: {e}")))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> PageExtractor {
        PageExtractor::new().unwrap()
    }

    #[test]
    fn total_pages_reads_numeric_text() {
        let html = r#"<div class="pagination"><span class="total-pages"> 42 </span></div>"#;
        assert_eq!(extractor().total_pages(html), Some(42));
    }

    #[test]
    fn total_pages_missing_element_is_none() {
        let html = r#"<div class="pagination"><span class="current">3</span></div>"#;
        assert_eq!(extractor().total_pages(html), None);
    }

    #[test]
    fn total_pages_non_numeric_text_is_none() {
        let html = r#"<div class="pagination"><span class="total-pages">many</span></div>"#;
        assert_eq!(extractor().total_pages(html), None);
    }

    #[test]
    fn extracts_category_and_trimmed_body() {
        let html = r#"
            <article>
              <a rel="nofollow">Work</a>
              <p class="short-desc">  a joke about deadlines  </p>
            </article>"#;
        let page = extractor().anecdotes(html);
        assert_eq!(
            page.records,
            vec![Anecdote::new("Work", "a joke about deadlines")]
        );
        assert_eq!(page.skipped_blocks, 0);
    }

    #[test]
    fn block_missing_category_is_skipped_alone() {
        let html = r#"
            <article><p class="short-desc">orphaned</p></article>
            <article>
              <a rel="nofollow">Cats</a>
              <p class="short-desc">a joke about cats</p>
            </article>"#;
        let page = extractor().anecdotes(html);
        assert_eq!(page.records, vec![Anecdote::new("Cats", "a joke about cats")]);
        assert_eq!(page.skipped_blocks, 1);
    }

    #[test]
    fn block_missing_body_is_skipped_alone() {
        let html = r#"
            <article><a rel="nofollow">Cats</a></article>
            <article>
              <a rel="nofollow">Dogs</a>
              <p class="short-desc">a joke about dogs</p>
            </article>"#;
        let page = extractor().anecdotes(html);
        assert_eq!(page.records, vec![Anecdote::new("Dogs", "a joke about dogs")]);
        assert_eq!(page.skipped_blocks, 1);
    }
}
