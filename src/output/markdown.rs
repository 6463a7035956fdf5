//! Markdown summary generation
//!
//! This module writes a human-readable markdown summary of a finished crawl:
//! run information, page statistics, and both ranked tables.

use crate::counting::Frequency;
use crate::crawler::CrawlReport;
use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Generates a markdown summary from a crawl report
///
/// # Arguments
///
/// * `report` - The finished crawl
/// * `config_hash` - Hash of the configuration file, when one was loaded
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote markdown summary
/// * `Err(CrawlError)` - Failed to write summary
pub fn generate_markdown_summary(
    report: &CrawlReport,
    config_hash: Option<&str>,
    output_path: &Path,
) -> crate::Result<()> {
    let markdown = format_markdown_summary(report, config_hash);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    tracing::info!("Summary written to {}", output_path.display());
    Ok(())
}

/// Formats a crawl report as markdown
pub fn format_markdown_summary(report: &CrawlReport, config_hash: Option<&str>) -> String {
    let mut md = String::new();

    md.push_str("# Wordcrawl Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Start URL**: {}\n", report.start_url));
    md.push_str(&format!("- **Max Depth**: {}\n", report.max_depth));
    md.push_str(&format!("- **Started**: {}\n", report.started_at.to_rfc3339()));
    md.push_str(&format!(
        "- **Finished**: {}\n",
        report.finished_at.to_rfc3339()
    ));
    md.push_str(&format!(
        "- **Duration**: {:.2} seconds\n",
        report.duration().num_milliseconds() as f64 / 1000.0
    ));
    if let Some(hash) = config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    md.push_str("## Page Statistics\n\n");
    md.push_str("| Pages | Count |\n");
    md.push_str("|-------|-------|\n");
    md.push_str(&format!("| Submitted | {} |\n", report.pages_submitted));
    md.push_str(&format!("| Processed | {} |\n", report.pages_processed));
    md.push_str(&format!("| Failed | {} |\n\n", report.pages_failed));

    push_ranking(&mut md, "Top Words", "Word", &report.top_words);
    push_ranking(&mut md, "Top Word Pairs", "Word Pair", &report.top_word_pairs);

    md
}

fn push_ranking<T: Display>(md: &mut String, title: &str, column: &str, rows: &[Frequency<T>]) {
    md.push_str(&format!("## {}\n\n", title));

    if rows.is_empty() {
        md.push_str("No entries.\n\n");
        return;
    }

    md.push_str(&format!("| Rank | {} | Count |\n", column));
    md.push_str("|------|------|-------|\n");
    for (rank, row) in rows.iter().enumerate() {
        md.push_str(&format!("| {} | {} | {} |\n", rank + 1, row.item, row.count));
    }
    md.push('\n');
}
