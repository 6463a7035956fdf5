//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - The `DocumentProvider` seam the traversal fetches through
//! - Building HTTP clients with the configured user agent and timeouts
//! - GET requests returning parsed pages
//! - Error classification into `FetchError`

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::crawler::parser::Page;
use crate::FetchError;
use reqwest::{header::CONTENT_TYPE, redirect::Policy, Client};
use std::future::Future;
use std::time::Duration;

/// Maximum redirect hops followed for one request
const MAX_REDIRECTS: usize = 10;

/// Source of fetched and parsed pages
///
/// Implemented over HTTP by [`HttpFetcher`]; tests substitute in-memory sites.
pub trait DocumentProvider: Send + Sync {
    /// Fetches and parses the page at `url`
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Page, FetchError>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `crawler` - Timeouts come from the crawler configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    crawler: &CrawlerConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(crawler.request_timeout_secs))
        .connect_timeout(Duration::from_secs(crawler.connect_timeout_secs))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and parses the response body
///
/// # Request Flow
///
/// 1. Send GET request, following up to 10 redirects
/// 2. Non-2xx status → `FetchError::Status`
/// 3. Content-Type that is neither `text/*` nor XML → `FetchError::ContentMismatch`
/// 4. Parse the body with the final (post-redirect) URL as base address
///
/// A missing Content-Type header is treated as HTML.
pub async fn fetch_page(client: &Client, url: &str) -> Result<Page, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    if let Some(content_type) = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        if !is_parseable(content_type) {
            return Err(FetchError::ContentMismatch {
                url: url.to_string(),
                content_type: content_type.to_string(),
            });
        }
    }

    let final_url = response.url().to_string();
    let body = response.text().await.map_err(|source| FetchError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(Page::parse(&body, &final_url))
}

fn is_parseable(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime.starts_with("text/") || mime.ends_with("/xml") || mime.ends_with("+xml")
}

/// Document provider backed by a reqwest client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &UserAgentConfig, crawler: &CrawlerConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(user_agent, crawler)?,
        })
    }
}

impl DocumentProvider for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        fetch_page(&self.client, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&UserAgentConfig::default(), &CrawlerConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_format() {
        let config = UserAgentConfig {
            crawler_name: "TestCrawler".to_string(),
            crawler_version: "1.0".to_string(),
        };
        assert_eq!(config.header_value(), "TestCrawler/1.0");
    }

    #[test]
    fn test_is_parseable() {
        assert!(is_parseable("text/html"));
        assert!(is_parseable("text/html; charset=utf-8"));
        assert!(is_parseable("TEXT/HTML"));
        assert!(is_parseable("text/plain"));
        assert!(is_parseable("application/xhtml+xml"));
        assert!(is_parseable("application/xml"));

        assert!(!is_parseable("application/pdf"));
        assert!(!is_parseable("image/png"));
        assert!(!is_parseable("application/json"));
    }

    mod http {
        use super::*;
        use wiremock::matchers::{header, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        fn fetcher() -> HttpFetcher {
            HttpFetcher::new(&UserAgentConfig::default(), &CrawlerConfig::default()).unwrap()
        }

        #[tokio::test]
        async fn test_fetch_sends_user_agent() {
            let server = MockServer::start().await;
            let agent = UserAgentConfig::default().header_value();

            Mock::given(method("GET"))
                .and(path("/"))
                .and(header("user-agent", agent.as_str()))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_string("<p>hello</p>")
                        .insert_header("content-type", "text/html"),
                )
                .expect(1)
                .mount(&server)
                .await;

            let page = fetcher().fetch(&format!("{}/", server.uri())).await.unwrap();
            assert_eq!(page.element_texts(), ["hello"]);
        }

        #[tokio::test]
        async fn test_redirect_sets_base_url() {
            let server = MockServer::start().await;

            Mock::given(method("GET"))
                .and(path("/old"))
                .respond_with(
                    ResponseTemplate::new(301)
                        .insert_header("location", format!("{}/new/", server.uri()).as_str()),
                )
                .mount(&server)
                .await;
            Mock::given(method("GET"))
                .and(path("/new/"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_string(r#"<a href="/child">child</a>"#)
                        .insert_header("content-type", "text/html"),
                )
                .mount(&server)
                .await;

            let page = fetcher().fetch(&format!("{}/old", server.uri())).await.unwrap();
            assert_eq!(page.base_url(), format!("{}/new/", server.uri()));
            assert_eq!(page.links(true), vec![format!("{}/child", server.uri())]);
        }

        #[tokio::test]
        async fn test_error_status() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(404))
                .mount(&server)
                .await;

            let result = fetcher().fetch(&format!("{}/missing", server.uri())).await;
            assert!(matches!(result, Err(FetchError::Status { status: 404, .. })));
        }

        #[tokio::test]
        async fn test_content_mismatch() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_string("{}")
                        .insert_header("content-type", "application/json"),
                )
                .mount(&server)
                .await;

            let result = fetcher().fetch(&format!("{}/data", server.uri())).await;
            assert!(matches!(result, Err(FetchError::ContentMismatch { .. })));
        }

        #[tokio::test]
        async fn test_connection_refused() {
            let result = fetcher().fetch("http://127.0.0.1:1/").await;
            assert!(matches!(result, Err(FetchError::Http { .. })));
        }
    }
}
