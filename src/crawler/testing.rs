//! In-memory site used by crawler tests

use crate::crawler::fetcher::DocumentProvider;
use crate::crawler::parser::Page;
use crate::FetchError;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Document provider serving fixed HTML per URL and recording every fetch
#[derive(Default)]
pub struct StaticSite {
    pages: HashMap<String, String>,
    fetches: Mutex<HashMap<String, usize>>,
}

impl StaticSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn fetch_count(&self, url: &str) -> usize {
        self.fetches.lock().get(url).copied().unwrap_or(0)
    }

    pub fn total_fetches(&self) -> usize {
        self.fetches.lock().values().sum()
    }
}

impl DocumentProvider for StaticSite {
    async fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        *self.fetches.lock().entry(url.to_string()).or_insert(0) += 1;

        match self.pages.get(url) {
            Some(html) => Ok(Page::parse(html, url)),
            None => Err(FetchError::Unreachable {
                url: url.to_string(),
            }),
        }
    }
}

/// Builds a page with one paragraph of text and one anchor per href
pub fn links_page(text: &str, hrefs: &[&str]) -> String {
    let anchors: String = hrefs
        .iter()
        .map(|href| format!(r#"<a href="{}">link</a>"#, href))
        .collect();
    format!("<html><body><p>{}</p>{}</body></html>", text, anchors)
}
