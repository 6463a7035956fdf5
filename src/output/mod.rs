//! Output module for crawl reports
//!
//! This module handles:
//! - Printing the ranked words and word pairs to the terminal
//! - Writing a markdown summary of a finished crawl

mod markdown;
mod report;

pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use report::{format_report, print_report};
