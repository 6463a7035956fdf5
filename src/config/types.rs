use crate::text::ENGLISH_STOP_WORDS;
use serde::Deserialize;

/// Main configuration structure for wordcrawl
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub processor: ProcessorConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
    #[serde(rename = "stop-words")]
    pub stop_words: StopWordsConfig,
}

impl Config {
    /// Validates this configuration, see [`crate::config::validate`]
    pub fn validate(&self) -> crate::ConfigResult<()> {
        crate::config::validate(self)
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Number of link levels followed from the start page
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Only follow links on the same host and port as the linking page
    #[serde(rename = "internal-links-only")]
    pub internal_links_only: bool,

    /// Maximum number of concurrent page fetches
    #[serde(rename = "fetch-concurrency")]
    pub fetch_concurrency: u32,

    /// Whole-request timeout in seconds
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Connection timeout in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            internal_links_only: true,
            fetch_concurrency: 16,
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Document processor pool configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Number of workers counting pages concurrently
    pub workers: u32,

    /// Pages that may wait for a worker before submission blocks
    #[serde(rename = "queue-capacity")]
    pub queue_capacity: u32,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            queue_capacity: 256,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "wordcrawl".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the `User-Agent` header value
    pub fn header_value(&self) -> String {
        format!("{}/{}", self.crawler_name, self.crawler_version)
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Number of top words and top word pairs reported
    #[serde(rename = "top-n")]
    pub top_n: usize,

    /// Path to the markdown summary file, if one should be written
    #[serde(rename = "summary-path")]
    pub summary_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            summary_path: None,
        }
    }
}

/// Stop words removed before counting
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StopWordsConfig {
    /// Case-insensitive stop words
    pub words: Vec<String>,
}

impl Default for StopWordsConfig {
    fn default() -> Self {
        Self {
            words: ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}
