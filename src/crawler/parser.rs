//! HTML parser producing owned pages
//!
//! This module parses fetched HTML into a [`Page`]: the text owned directly
//! by each element, in document order, and the `href` of every anchor.
//! The parsed DOM is dropped before the page leaves this module, so pages
//! can be shared across worker threads.

use crate::url::{host_port, is_valid_http_url, protocol, resolve_relative, same_site};
use scraper::{ElementRef, Html, Selector};

/// Elements whose text content is not page prose
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// A fetched and parsed page
#[derive(Debug, Clone)]
pub struct Page {
    /// Absolute address used to resolve relative links
    base_url: String,

    /// Own text of each element that has any, in document order
    element_texts: Vec<String>,

    /// Raw `href` values of `<a>` elements, as written
    anchors: Vec<String>,
}

impl Page {
    /// Parses HTML content into a page
    ///
    /// # Arguments
    ///
    /// * `html` - The HTML content to parse
    /// * `base_url` - The address the content was fetched from
    ///
    /// # Example
    ///
    /// ```
    /// use wordcrawl::crawler::Page;
    ///
    /// let html = r#"<html><body><p>Hello <b>big</b> world</p><a href="/next">Next</a></body></html>"#;
    /// let page = Page::parse(html, "https://example.com/");
    /// assert_eq!(page.element_texts(), ["Hello world", "big", "Next"]);
    /// assert_eq!(page.links(true), ["https://example.com/next"]);
    /// ```
    pub fn parse(html: &str, base_url: &str) -> Self {
        let document = Html::parse_document(html);

        let element_texts = document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|element| !SKIPPED_ELEMENTS.contains(&element.value().name()))
            .map(|element| own_text(&element))
            .filter(|text| !text.is_empty())
            .collect();

        let mut anchors = Vec::new();
        if let Ok(a_selector) = Selector::parse("a[href]") {
            for element in document.select(&a_selector) {
                if let Some(href) = element.value().attr("href") {
                    anchors.push(href.to_string());
                }
            }
        }

        Self {
            base_url: base_url.to_string(),
            element_texts,
            anchors,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn element_texts(&self) -> &[String] {
        &self.element_texts
    }

    pub fn anchors(&self) -> &[String] {
        &self.anchors
    }

    /// Extracts the outgoing links of this page
    ///
    /// Root-relative hrefs are resolved against this page's host and
    /// protocol. With `internal_only`, only valid links on the same host and
    /// port (compared case-insensitively, any protocol) are returned;
    /// otherwise every valid http(s) link is. Surrounding whitespace in an
    /// href is ignored.
    pub fn links(&self, internal_only: bool) -> Vec<String> {
        let page_host_port = host_port(&self.base_url);
        let page_protocol = protocol(&self.base_url);

        self.anchors
            .iter()
            .map(|href| absolutize(href.trim(), page_host_port.as_deref(), page_protocol.as_deref()))
            .filter(|link| is_valid_http_url(link))
            .filter(|link| !internal_only || same_site(&self.base_url, link))
            .collect()
    }
}

/// Joins the text nodes directly under `element`, whitespace-normalised
fn own_text(element: &ElementRef) -> String {
    element
        .children()
        .filter_map(|child| child.value().as_text())
        .flat_map(|text| text.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

fn absolutize(href: &str, host_port: Option<&str>, protocol: Option<&str>) -> String {
    if let Some(rest) = href.strip_prefix("//") {
        if let Some(protocol) = protocol {
            return format!("{}://{}", protocol, rest);
        }
    } else if href.starts_with('/') {
        if let (Some(host_port), Some(protocol)) = (host_port, protocol) {
            return resolve_relative(host_port, protocol, href);
        }
    }
    href.to_string()
}
