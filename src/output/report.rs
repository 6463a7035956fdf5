//! Terminal report of a finished crawl

use crate::counting::Frequency;
use crate::crawler::CrawlReport;
use std::fmt::Display;

/// Formats the run summary and both ranked tables
pub fn format_report(report: &CrawlReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Crawled {} (depth {}): {} pages, {} processed, {} failed in {:.2}s\n\n",
        report.start_url,
        report.max_depth,
        report.pages_submitted,
        report.pages_processed,
        report.pages_failed,
        report.duration().num_milliseconds() as f64 / 1000.0
    ));

    push_table(&mut out, "Top words", &report.top_words);
    out.push('\n');
    push_table(&mut out, "Top word pairs", &report.top_word_pairs);

    out
}

/// Prints the report to stdout
pub fn print_report(report: &CrawlReport) {
    print!("{}", format_report(report));
}

fn push_table<T: Display>(out: &mut String, title: &str, rows: &[Frequency<T>]) {
    out.push_str(&format!("{} ({}):\n", title, rows.len()));
    if rows.is_empty() {
        out.push_str("  (none)\n");
        return;
    }

    let width = rows
        .iter()
        .map(|row| row.item.to_string().chars().count())
        .max()
        .unwrap_or(0);

    for (rank, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "  {:>3}. {:<width$}  {}\n",
            rank + 1,
            row.item.to_string(),
            row.count,
            width = width
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{Word, WordPair};
    use chrono::{TimeZone, Utc};

    fn report() -> CrawlReport {
        CrawlReport {
            start_url: "http://example.com".to_string(),
            max_depth: 2,
            pages_submitted: 5,
            pages_processed: 4,
            pages_failed: 1,
            top_words: vec![
                Frequency {
                    item: Word::new("rust"),
                    count: 12,
                },
                Frequency {
                    item: Word::new("Crawler"),
                    count: 3,
                },
            ],
            top_word_pairs: Vec::new(),
            started_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            finished_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 3).unwrap(),
        }
    }

    #[test]
    fn test_format_report_summary_line() {
        let text = format_report(&report());
        assert!(text.starts_with("Crawled http://example.com (depth 2): 5 pages, 4 processed, 1 failed in 3.00s"));
    }

    #[test]
    fn test_format_report_tables() {
        let text = format_report(&report());

        assert!(text.contains("Top words (2):"));
        assert!(text.contains("    1. rust     12"));
        assert!(text.contains("    2. Crawler  3"));
        assert!(text.contains("Top word pairs (0):\n  (none)"));
    }

    #[test]
    fn test_pairs_are_space_joined() {
        let mut report = report();
        report.top_word_pairs = vec![Frequency {
            item: WordPair::new("open", "Source"),
            count: 2,
        }];

        assert!(format_report(&report).contains("1. open Source  2"));
    }
}
