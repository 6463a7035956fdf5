//! Crawler module for page fetching, traversal and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `DocumentProvider` seam
//! - HTML parsing into element texts and links
//! - The asynchronous document processor pool
//! - Depth-bounded breadth-first traversal
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod parser;
mod processor;
#[cfg(test)]
mod testing;
mod traversal;

pub use coordinator::{run_crawl, Coordinator, CrawlReport};
pub use fetcher::{build_http_client, fetch_page, DocumentProvider, HttpFetcher};
pub use parser::Page;
pub use processor::{
    extract, Completion, DocumentProcessor, Extractor, JoinSummary, ProcessedPage,
};
pub use traversal::{Traverser, VisitedSet};
