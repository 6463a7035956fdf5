//! Document processor - asynchronous page counting
//!
//! Submitted pages go onto a bounded queue drained by a fixed pool of
//! workers. Each finished unit, successful or not, produces exactly one
//! completion on an unbounded channel, in whatever order units finish.
//! The caller joins by taking as many completions as it submitted pages.

use crate::counting::WordCounts;
use crate::crawler::parser::Page;
use crate::text::{pair_up, segment};
use crate::{CrawlError, ProcessError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

/// Extraction work applied to one page, returning the number of elements visited
pub type Extractor = Arc<dyn Fn(&Page) -> usize + Send + Sync>;

/// Outcome of one processed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedPage {
    /// Base address of the page
    pub url: String,

    /// Number of elements whose text was counted
    pub elements: usize,
}

/// One completed unit of work
pub type Completion = Result<ProcessedPage, ProcessError>;

/// Tally of a completion join
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinSummary {
    pub processed: usize,
    pub failed: usize,
}

/// Counts the words and word pairs of every element of `page`
///
/// Pairs are built per element, so no pair spans two elements.
pub fn extract(page: &Page, counts: &WordCounts) -> usize {
    for text in page.element_texts() {
        let words = segment(text);
        counts.add_words(&words);
        counts.add_word_pairs(&pair_up(&words));
    }
    page.element_texts().len()
}

/// Worker pool counting submitted pages
pub struct DocumentProcessor {
    queue: Option<mpsc::Sender<Arc<Page>>>,
    completions: mpsc::UnboundedReceiver<Completion>,
    workers: Vec<JoinHandle<()>>,
    processed: Arc<AtomicUsize>,
}

impl DocumentProcessor {
    /// Starts a pool that feeds every page into `counts`
    ///
    /// # Arguments
    ///
    /// * `counts` - Aggregation target shared by all workers
    /// * `workers` - Fixed number of workers
    /// * `queue_capacity` - Pages that may wait before `submit` waits
    pub fn start(counts: Arc<WordCounts>, workers: usize, queue_capacity: usize) -> Self {
        Self::with_extractor(
            Arc::new(move |page: &Page| extract(page, &counts)),
            workers,
            queue_capacity,
        )
    }

    /// Starts a pool running an arbitrary extractor
    pub fn with_extractor(extractor: Extractor, workers: usize, queue_capacity: usize) -> Self {
        let (queue_tx, queue_rx) = mpsc::channel(queue_capacity.max(1));
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let queue_rx = Arc::new(Mutex::new(queue_rx));
        let processed = Arc::new(AtomicUsize::new(0));

        let workers = (0..workers.max(1))
            .map(|id| {
                tokio::spawn(run_worker(
                    id,
                    Arc::clone(&queue_rx),
                    completion_tx.clone(),
                    Arc::clone(&extractor),
                    Arc::clone(&processed),
                ))
            })
            .collect();

        Self {
            queue: Some(queue_tx),
            completions: completion_rx,
            workers,
            processed,
        }
    }

    /// Schedules `page` for counting
    ///
    /// Waits only while the queue is full. Fails with `CrawlError::PoolClosed`
    /// once the pool has been shut down.
    pub async fn submit(&self, page: Arc<Page>) -> Result<(), CrawlError> {
        let queue = self.queue.as_ref().ok_or_else(|| CrawlError::PoolClosed {
            url: page.base_url().to_string(),
        })?;

        queue.send(page).await.map_err(|rejected| CrawlError::PoolClosed {
            url: rejected.0.base_url().to_string(),
        })
    }

    /// Takes the next completion, in completion order
    ///
    /// Returns `None` once the pool is shut down and every completion has
    /// been taken.
    pub async fn take(&mut self) -> Option<Completion> {
        self.completions.recv().await
    }

    /// Takes exactly `expected` completions
    ///
    /// Failed units are logged and counted; they do not stop the join.
    pub async fn join(&mut self, expected: usize) -> JoinSummary {
        let mut summary = JoinSummary::default();

        for _ in 0..expected {
            match self.take().await {
                Some(Ok(_)) => summary.processed += 1,
                Some(Err(e)) => {
                    tracing::warn!("Document processing failed: {}", e);
                    summary.failed += 1;
                }
                None => {
                    tracing::error!(
                        "Completion channel closed after {} of {} pages",
                        summary.processed + summary.failed,
                        expected
                    );
                    break;
                }
            }
        }

        summary
    }

    /// Number of pages counted successfully so far
    pub fn pages_processed(&self) -> usize {
        self.processed.load(Ordering::Relaxed)
    }

    /// Closes the queue, lets workers drain it, and waits for them to exit
    ///
    /// Submissions after shutdown are rejected.
    pub async fn shutdown(&mut self) {
        self.queue.take();

        for handle in self.workers.drain(..) {
            if let Err(e) = handle.await {
                tracing::error!("Document processor worker failed: {}", e);
            }
        }
    }
}

async fn run_worker(
    id: usize,
    queue: Arc<Mutex<mpsc::Receiver<Arc<Page>>>>,
    completions: mpsc::UnboundedSender<Completion>,
    extractor: Extractor,
    processed: Arc<AtomicUsize>,
) {
    tracing::trace!("Document processor worker {} started", id);

    loop {
        let next = { queue.lock().await.recv().await };
        let Some(page) = next else {
            break;
        };

        let url = page.base_url().to_string();
        let extractor = Arc::clone(&extractor);
        let outcome = tokio::task::spawn_blocking(move || extractor(page.as_ref())).await;

        let completion = match outcome {
            Ok(elements) => {
                let count = processed.fetch_add(1, Ordering::Relaxed) + 1;
                tracing::debug!("Pages processed: {} ({})", count, url);
                Ok(ProcessedPage { url, elements })
            }
            Err(e) if e.is_panic() => Err(ProcessError::Panicked { url }),
            Err(_) => Err(ProcessError::Aborted { url }),
        };

        if completions.send(completion).is_err() {
            break;
        }
    }

    tracing::trace!("Document processor worker {} finished", id);
}
