//! wordcrawl main entry point
//!
//! This is the command-line interface for the wordcrawl site crawler.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wordcrawl::config::{load_config_with_hash, Config};
use wordcrawl::output::{generate_markdown_summary, print_report};
use wordcrawl::run_crawl;

/// wordcrawl: ranks the most frequent words and word pairs of a website
///
/// wordcrawl crawls a site breadth-first from a start URL up to a bounded
/// depth and prints the most frequent words and adjacent word pairs across
/// every page it reached.
#[derive(Parser, Debug)]
#[command(name = "wordcrawl")]
#[command(version)]
#[command(about = "Word frequency crawler", long_about = None)]
struct Cli {
    /// Start URL (http:// or https://)
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum link depth to follow from the start page
    #[arg(short, long)]
    depth: Option<u32>,

    /// Number of words and word pairs to report
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Follow links to other hosts as well
    #[arg(long)]
    all_links: bool,

    /// Number of document processor workers
    #[arg(short, long)]
    workers: Option<u32>,

    /// Write a markdown summary to this file
    #[arg(short, long, value_name = "FILE")]
    summary: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let (mut config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };

    apply_overrides(&mut config, &cli);
    config.validate().context("invalid configuration")?;

    let report = match run_crawl(&cli.url, &config).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    print_report(&report);

    if let Some(path) = &config.output.summary_path {
        generate_markdown_summary(&report, config_hash.as_deref(), Path::new(path))
            .with_context(|| format!("failed to write summary to {}", path))?;
    }

    Ok(())
}

/// Applies command-line flags over the file configuration
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(depth) = cli.depth {
        config.crawler.max_depth = depth;
    }
    if cli.all_links {
        config.crawler.internal_links_only = false;
    }
    if let Some(top) = cli.top {
        config.output.top_n = top;
    }
    if let Some(workers) = cli.workers {
        config.processor.workers = workers;
    }
    if let Some(summary) = &cli.summary {
        config.output.summary_path = Some(summary.display().to_string());
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wordcrawl=info,warn"),
            1 => EnvFilter::new("wordcrawl=debug,info"),
            2 => EnvFilter::new("wordcrawl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}
