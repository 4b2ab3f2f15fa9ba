//! Pair evaluation: fetch one (parent, child) pair and score all signals

use tracing::{debug, warn};
use url::Url;

use crate::extract::{self, NO_TITLE};
use crate::fetch::{ensure_http, PageFetcher};
use crate::similarity::{content, lexical, visual};
use crate::types::SimilarityReport;

/// Evaluates one (parent, child) pair into a [`SimilarityReport`].
///
/// Every sub-signal degrades to 0.0 on missing or unreadable evidence; an
/// evaluation never fails and never returns a partial report.
pub struct PairEvaluator {
    fetcher: PageFetcher,
}

impl PairEvaluator {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }

    /// Fetch both sides and compute content, favicon and title similarity.
    ///
    /// Each side's page is fetched once and reused for the content and title
    /// signals; the favicon pipeline runs concurrently with the page fetches.
    pub async fn evaluate(&self, parent: &str, child: &str) -> SimilarityReport {
        let (parent_page, child_page, favicon) = tokio::join!(
            self.page_body(parent),
            self.page_body(child),
            self.favicon_similarity(parent, child),
        );

        let content = content::score(&parent_page, &child_page);
        let title = title_similarity(
            &extract::extract_title(&parent_page),
            &extract::extract_title(&child_page),
        );

        SimilarityReport::compose(content, favicon, title)
    }

    /// Find the first icon resource declared in a domain's page metadata.
    ///
    /// `None` when the site is unreachable or declares no icon.
    pub async fn discover_favicon(&self, domain: &str) -> Option<Url> {
        let body = match self.fetcher.fetch_page(domain).await {
            Ok(body) => body,
            Err(err) => {
                debug!("favicon discovery failed for {domain}: {err}");
                return None;
            }
        };

        let base = Url::parse(&ensure_http(domain)).ok()?;
        extract::declared_icons(&body, &base).into_iter().next()
    }

    async fn page_body(&self, domain: &str) -> String {
        match self.fetcher.fetch_page(domain).await {
            Ok(body) => body,
            Err(err) => {
                warn!("failed to fetch content from {domain}: {err}");
                String::new()
            }
        }
    }

    async fn favicon_similarity(&self, parent: &str, child: &str) -> f64 {
        let (parent_icon, child_icon) =
            tokio::join!(self.favicon_bytes(parent), self.favicon_bytes(child));

        match (parent_icon, child_icon) {
            (Some(a), Some(b)) => visual::score(&a, &b),
            _ => 0.0,
        }
    }

    async fn favicon_bytes(&self, domain: &str) -> Option<Vec<u8>> {
        let url = self.discover_favicon(domain).await?;
        match self.fetcher.fetch_bytes(&url).await {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                warn!("failed to fetch favicon {url} for {domain}: {err}");
                None
            }
        }
    }
}

/// Title similarity in `[0, 100]` using the lexical edit-distance ratio.
///
/// An empty title or the "no title" sentinel on either side scores 0.0: two
/// unreadable pages would otherwise produce identical sentinels and a perfect
/// title match.
pub fn title_similarity(title_a: &str, title_b: &str) -> f64 {
    if title_a.is_empty() || title_b.is_empty() {
        return 0.0;
    }
    if title_a == NO_TITLE || title_b == NO_TITLE {
        debug!("title unavailable on at least one side, scoring 0");
        return 0.0;
    }
    lexical::ratio(title_a, title_b) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_titles_score_100() {
        assert_eq!(title_similarity("Example Bank", "Example Bank"), 100.0);
    }

    #[test]
    fn close_titles_score_high() {
        let s = title_similarity("Example Bank Login", "Examp1e Bank Login");
        assert!(s >= 90.0, "got {s}");
    }

    #[test]
    fn empty_title_scores_zero() {
        assert_eq!(title_similarity("", "Example Bank"), 0.0);
        assert_eq!(title_similarity("Example Bank", ""), 0.0);
    }

    #[test]
    fn sentinel_titles_score_zero() {
        // Two unreadable pages must not count as a title match
        assert_eq!(title_similarity(NO_TITLE, NO_TITLE), 0.0);
        assert_eq!(title_similarity(NO_TITLE, "Example Bank"), 0.0);
        assert_eq!(title_similarity("Example Bank", NO_TITLE), 0.0);
    }
}
