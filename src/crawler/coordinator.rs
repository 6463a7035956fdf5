//! Crawler coordinator - main crawl orchestration logic
//!
//! A crawl validates its inputs, starts the document processor, runs the
//! traversal, waits for every submitted page to finish processing, shuts
//! the pool down and finally reads the rankings out of the shared counts.

use crate::config::Config;
use crate::counting::{Frequency, WordCounts};
use crate::crawler::fetcher::{DocumentProvider, HttpFetcher};
use crate::crawler::processor::DocumentProcessor;
use crate::crawler::traversal::Traverser;
use crate::text::{StopWords, Word, WordPair};
use crate::url::parse_http_url;
use crate::CrawlError;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Outcome of one crawl
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub start_url: String,
    pub max_depth: u32,
    /// Pages fetched and handed to the processor
    pub pages_submitted: usize,
    /// Pages whose extraction completed
    pub pages_processed: usize,
    /// Pages whose extraction failed
    pub pages_failed: usize,
    pub top_words: Vec<Frequency<Word>>,
    pub top_word_pairs: Vec<Frequency<WordPair>>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    /// Wall-clock time between start and finish
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// Main crawler coordinator structure
pub struct Coordinator<P> {
    config: Config,
    provider: Arc<P>,
}

impl Coordinator<HttpFetcher> {
    /// Creates a coordinator that fetches pages over HTTP
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(CrawlError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, CrawlError> {
        let fetcher = HttpFetcher::new(&config.user_agent, &config.crawler)?;
        Ok(Self::with_provider(config, Arc::new(fetcher)))
    }
}

impl<P: DocumentProvider + 'static> Coordinator<P> {
    /// Creates a coordinator over any document provider
    pub fn with_provider(config: Config, provider: Arc<P>) -> Self {
        Self { config, provider }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs a complete crawl from `start_url`
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - Crawl finished; an unreachable start page yields an empty report
    /// * `Err(CrawlError)` - Invalid configuration, invalid start URL or a closed pool
    pub async fn run(&self, start_url: &str) -> Result<CrawlReport, CrawlError> {
        self.config.validate()?;

        // Keyed in its normalised form, the same form links resolve to
        let start = match parse_http_url(start_url) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Invalid url {}: {}", start_url, e);
                return Err(e.into());
            }
        };
        let start_url = start.as_str();

        let started_at = Utc::now();
        let crawler = &self.config.crawler;
        tracing::info!(
            "Starting crawl of {} (max depth {}, {})",
            start_url,
            crawler.max_depth,
            if crawler.internal_links_only {
                "internal links only"
            } else {
                "all links"
            }
        );

        let counts = Arc::new(WordCounts::new(StopWords::new(
            &self.config.stop_words.words,
        )));
        let mut processor = DocumentProcessor::start(
            Arc::clone(&counts),
            self.config.processor.workers as usize,
            self.config.processor.queue_capacity as usize,
        );

        let traverser = Traverser::new(
            Arc::clone(&self.provider),
            crawler.internal_links_only,
            crawler.fetch_concurrency as usize,
        );

        let submitted = match traverser
            .traverse(start_url, crawler.max_depth, &processor)
            .await
        {
            Ok(submitted) => submitted,
            Err(e) => {
                processor.shutdown().await;
                return Err(e);
            }
        };

        let summary = processor.join(submitted).await;
        processor.shutdown().await;

        let top_n = self.config.output.top_n;
        let report = CrawlReport {
            start_url: start_url.to_string(),
            max_depth: crawler.max_depth,
            pages_submitted: submitted,
            pages_processed: summary.processed,
            pages_failed: summary.failed,
            top_words: counts.top_words(top_n),
            top_word_pairs: counts.top_word_pairs(top_n),
            started_at,
            finished_at: Utc::now(),
        };

        tracing::info!(
            "Crawl complete: {} pages processed, {} failed, {} distinct words in {}ms",
            report.pages_processed,
            report.pages_failed,
            counts.words().len(),
            report.duration().num_milliseconds()
        );

        Ok(report)
    }
}

/// Crawls `start_url` over HTTP with the given configuration
pub async fn run_crawl(start_url: &str, config: &Config) -> Result<CrawlReport, CrawlError> {
    Coordinator::new(config.clone())?.run(start_url).await
}
