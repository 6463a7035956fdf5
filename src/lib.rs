//! wordcrawl: breadth-first site crawler with word frequency ranking
//!
//! This crate crawls a website level by level up to a bounded depth, processes
//! every fetched page on a worker pool, and ranks the most frequent words and
//! adjacent word pairs across all visited pages.

pub mod config;
pub mod counting;
pub mod crawler;
pub mod output;
pub mod text;
pub mod url;

use thiserror::Error;

/// Main error type for wordcrawl operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid start URL: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Document processor pool is closed, rejected page {url}")]
    PoolClosed { url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL '{url}': {source}")]
    Parse {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Only http:// and https:// addresses are supported, got '{0}'")]
    InvalidScheme(String),

    #[error("Missing host in URL '{0}'")]
    MissingHost(String),
}

/// Errors raised while fetching a single page
///
/// These never abort a crawl: the traversal treats the URL as a dead link.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Expected HTML from {url}, got '{content_type}'")]
    ContentMismatch { url: String, content_type: String },

    #[error("No document at {url}")]
    Unreachable { url: String },
}

/// Errors recorded for a single unit of document processing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    #[error("Extraction panicked for {url}")]
    Panicked { url: String },

    #[error("Extraction was cancelled for {url}")]
    Aborted { url: String },
}

/// Result type alias for wordcrawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use counting::{Frequency, FrequencyStore, WordCounts};
pub use crawler::{run_crawl, CrawlReport};
pub use text::{Word, WordPair};
