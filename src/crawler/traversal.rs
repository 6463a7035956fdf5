//! Traversal engine - depth-bounded breadth-first crawling
//!
//! The frontier holds fetched pages together with their own depth. Each
//! popped page has its links fetched concurrently; every successful fetch is
//! submitted for counting and queued one level deeper. A URL is claimed in
//! the shared visited set before it is fetched, so no URL is fetched twice
//! even when several fan-outs race for it.

use crate::crawler::fetcher::DocumentProvider;
use crate::crawler::parser::Page;
use crate::crawler::processor::DocumentProcessor;
use crate::CrawlError;
use parking_lot::Mutex;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Set of URLs already claimed by this traversal
///
/// Grows monotonically; entries are never removed.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: Mutex<HashSet<String>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `url`, returning false if it was already claimed
    pub fn insert(&self, url: &str) -> bool {
        self.urls.lock().insert(url.to_string())
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.lock().contains(url)
    }

    pub fn len(&self) -> usize {
        self.urls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Breadth-first crawler over a document provider
pub struct Traverser<P> {
    provider: Arc<P>,
    internal_links_only: bool,
    fetch_concurrency: usize,
}

impl<P: DocumentProvider + 'static> Traverser<P> {
    /// Creates a traverser
    ///
    /// # Arguments
    ///
    /// * `provider` - Source of pages
    /// * `internal_links_only` - Follow only links on the linking page's host and port
    /// * `fetch_concurrency` - Maximum fetches in flight during one fan-out
    pub fn new(provider: Arc<P>, internal_links_only: bool, fetch_concurrency: usize) -> Self {
        Self {
            provider,
            internal_links_only,
            fetch_concurrency: fetch_concurrency.max(1),
        }
    }

    /// Crawls from `start_url`, following links up to `max_depth` levels
    ///
    /// Every fetched page is submitted to `processor`. Fetch failures are
    /// logged and skipped; an unreachable start page ends the crawl with a
    /// count of zero.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of pages fetched and submitted
    /// * `Err(CrawlError)` - The processor pool rejected a page
    pub async fn traverse(
        &self,
        start_url: &str,
        max_depth: u32,
        processor: &DocumentProcessor,
    ) -> Result<usize, CrawlError> {
        let visited = Arc::new(VisitedSet::new());
        let semaphore = Arc::new(Semaphore::new(self.fetch_concurrency));

        visited.insert(start_url);
        let start_page = match self.provider.fetch(start_url).await {
            Ok(page) => Arc::new(page),
            Err(e) => {
                tracing::error!("Invalid document or url {}: {}", start_url, e);
                return Ok(0);
            }
        };

        tracing::debug!("Processing page {} at depth 0", start_url);
        processor.submit(Arc::clone(&start_page)).await?;
        let mut submitted = 1;

        let mut frontier: VecDeque<(Arc<Page>, u32)> = VecDeque::new();
        frontier.push_back((start_page, 0));

        while let Some((page, depth)) = frontier.pop_front() {
            if depth >= max_depth {
                break;
            }

            let mut fetches = JoinSet::new();
            for link in page.links(self.internal_links_only) {
                let provider = Arc::clone(&self.provider);
                let visited = Arc::clone(&visited);
                let semaphore = Arc::clone(&semaphore);

                fetches.spawn(async move {
                    if !visited.insert(&link) {
                        return None;
                    }
                    let _permit = semaphore.acquire_owned().await.ok()?;

                    match provider.fetch(&link).await {
                        Ok(child) => Some((link, child)),
                        Err(e) => {
                            tracing::warn!("Error: {}, likely dead/erroneous link: {}", e, link);
                            None
                        }
                    }
                });
            }

            while let Some(joined) = fetches.join_next().await {
                match joined {
                    Ok(Some((url, child))) => {
                        let child = Arc::new(child);
                        tracing::debug!("Processing page {} at depth {}", url, depth + 1);
                        processor.submit(Arc::clone(&child)).await?;
                        submitted += 1;
                        frontier.push_back((child, depth + 1));
                    }
                    Ok(None) => {}
                    Err(e) => tracing::warn!("Fetch task failed: {}", e),
                }
            }
        }

        tracing::info!(
            "Traversal complete: {} pages submitted, {} URLs seen",
            submitted,
            visited.len()
        );

        Ok(submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::processor::{Extractor, JoinSummary};
    use crate::crawler::testing::{links_page, StaticSite};

    const ROOT: &str = "http://zero.com";

    fn url(path: &str) -> String {
        format!("{}{}", ROOT, path)
    }

    fn noop_processor() -> DocumentProcessor {
        let extractor: Extractor = Arc::new(|_: &Page| 0);
        DocumentProcessor::with_extractor(extractor, 2, 64)
    }

    /// zero -> one1, one2, two2; one1 -> two1, zero; one2 -> two2, three1;
    /// two1 -> three1; two2 -> three2
    fn layered_site() -> StaticSite {
        StaticSite::new()
            .page(ROOT, &links_page("zero", &["/one1", "/one2", "/two2"]))
            .page(&url("/one1"), &links_page("one1", &["/two1", ROOT]))
            .page(&url("/one2"), &links_page("one2", &["/two2", "/three1"]))
            .page(&url("/two1"), &links_page("two1", &["/three1"]))
            .page(&url("/two2"), &links_page("two2", &["/three2"]))
            .page(&url("/three1"), &links_page("three1", &[]))
            .page(&url("/three2"), &links_page("three2", &[]))
    }

    async fn crawl(site: Arc<StaticSite>, depth: u32, internal_only: bool) -> usize {
        let mut processor = noop_processor();
        let traverser = Traverser::new(site, internal_only, 4);

        let submitted = traverser.traverse(ROOT, depth, &processor).await.unwrap();
        let summary = processor.join(submitted).await;
        processor.shutdown().await;

        assert_eq!(summary, JoinSummary { processed: submitted, failed: 0 });
        submitted
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_depth_bounds() {
        assert_eq!(crawl(Arc::new(layered_site()), 0, true).await, 1);
        assert_eq!(crawl(Arc::new(layered_site()), 1, true).await, 4);
        assert_eq!(crawl(Arc::new(layered_site()), 2, true).await, 7);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_each_url_fetched_once() {
        let site = Arc::new(layered_site());
        crawl(Arc::clone(&site), 5, true).await;

        for path in ["", "/one1", "/one2", "/two1", "/two2", "/three1", "/three2"] {
            assert_eq!(site.fetch_count(&url(path)), 1, "{} fetched more than once", path);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_fully_connected_graph() {
        let site = Arc::new(
            StaticSite::new()
                .page(ROOT, &links_page("a", &["/b", "/c", ROOT]))
                .page(&url("/b"), &links_page("b", &[ROOT, "/c", "/b"]))
                .page(&url("/c"), &links_page("c", &[ROOT, "/b", "/c"])),
        );

        assert_eq!(crawl(Arc::clone(&site), 1, true).await, 3);
        assert_eq!(site.total_fetches(), 3);
    }

    #[tokio::test]
    async fn test_unreachable_start_returns_zero() {
        let site = Arc::new(StaticSite::new());
        assert_eq!(crawl(Arc::clone(&site), 3, true).await, 0);
        assert_eq!(site.total_fetches(), 1);
    }

    #[tokio::test]
    async fn test_dead_links_are_skipped() {
        let site = Arc::new(
            StaticSite::new()
                .page(ROOT, &links_page("zero", &["/missing", "/alive"]))
                .page(&url("/alive"), &links_page("alive", &["/also-missing"])),
        );

        assert_eq!(crawl(Arc::clone(&site), 3, true).await, 2);
        assert_eq!(site.fetch_count(&url("/missing")), 1);
        assert_eq!(site.fetch_count(&url("/also-missing")), 1);
    }

    #[tokio::test]
    async fn test_internal_links_filter() {
        let site = || {
            Arc::new(
                StaticSite::new()
                    .page(ROOT, &links_page("zero", &["/inside", "http://other.com/page"]))
                    .page(&url("/inside"), &links_page("inside", &[]))
                    .page("http://other.com/page", &links_page("outside", &[])),
            )
        };

        let internal = site();
        assert_eq!(crawl(Arc::clone(&internal), 1, true).await, 2);
        assert_eq!(internal.fetch_count("http://other.com/page"), 0);

        let all = site();
        assert_eq!(crawl(Arc::clone(&all), 1, false).await, 3);
    }

    #[tokio::test]
    async fn test_closed_pool_is_fatal() {
        let site = Arc::new(layered_site());
        let mut processor = noop_processor();
        processor.shutdown().await;

        let traverser = Traverser::new(site, true, 4);
        let result = traverser.traverse(ROOT, 2, &processor).await;
        assert!(matches!(result, Err(CrawlError::PoolClosed { .. })));
    }

    #[test]
    fn test_visited_set_first_insert_wins() {
        let visited = VisitedSet::new();
        assert!(visited.is_empty());
        assert!(visited.insert("http://a.com/"));
        assert!(!visited.insert("http://a.com/"));
        assert!(visited.contains("http://a.com/"));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_visited_set_concurrent_claims() {
        let visited = Arc::new(VisitedSet::new());
        let winners: usize = (0..8)
            .map(|_| {
                let visited = Arc::clone(&visited);
                std::thread::spawn(move || {
                    (0..100)
                        .filter(|i| visited.insert(&format!("http://a.com/{}", i)))
                        .count()
                })
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .sum();

        assert_eq!(winners, 100);
    }
}
