use crate::{UrlError, UrlResult};
use url::Url;

/// Parses a string as an absolute http(s) address
///
/// # Arguments
///
/// * `url_str` - The candidate address
///
/// # Returns
///
/// * `Ok(Url)` - The parsed address
/// * `Err(UrlError)` - Malformed, non-http(s), or host-less input
///
/// # Examples
///
/// ```
/// use wordcrawl::url::parse_http_url;
///
/// assert!(parse_http_url("https://example.com/page").is_ok());
/// assert!(parse_http_url("ftp://example.com/file").is_err());
/// ```
pub fn parse_http_url(url_str: &str) -> UrlResult<Url> {
    let url = Url::parse(url_str).map_err(|source| UrlError::Parse {
        url: url_str.to_string(),
        source,
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url_str.to_string()));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost(url_str.to_string()));
    }

    Ok(url)
}

/// Returns true if the string is a syntactically valid http or https address
pub fn is_valid_http_url(url_str: &str) -> bool {
    parse_http_url(url_str).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_valid_http_url("http://example.com"));
        assert!(is_valid_http_url("https://example.com/path?q=1"));
        assert!(is_valid_http_url("HTTPS://EXAMPLE.COM/"));
        assert!(is_valid_http_url("http://127.0.0.1:8080/index.html"));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(!is_valid_http_url("ftp://example.com/file"));
        assert!(!is_valid_http_url("mailto:someone@example.com"));
        assert!(!is_valid_http_url("javascript:void(0)"));
        assert!(matches!(
            parse_http_url("file:///etc/hosts"),
            Err(UrlError::InvalidScheme(_))
        ));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(!is_valid_http_url(""));
        assert!(!is_valid_http_url("example.com"));
        assert!(!is_valid_http_url("/relative/path"));
        assert!(!is_valid_http_url("#fragment"));
        assert!(matches!(
            parse_http_url("not a url"),
            Err(UrlError::Parse { .. })
        ));
    }
}
