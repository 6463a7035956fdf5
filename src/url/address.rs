use url::Url;

/// Extracts the `host[:port]` portion of an address
///
/// The port is only present when the address carries a non-default port.
///
/// # Examples
///
/// ```
/// use wordcrawl::url::host_port;
///
/// assert_eq!(host_port("https://example.com/a"), Some("example.com".to_string()));
/// assert_eq!(host_port("http://example.com:8080/a"), Some("example.com:8080".to_string()));
/// assert_eq!(host_port("not a url"), None);
/// ```
pub fn host_port(url_str: &str) -> Option<String> {
    let url = Url::parse(url_str).ok()?;
    let host = url.host_str()?;

    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host.to_string()),
    }
}

/// Extracts the protocol (scheme) of an address
pub fn protocol(url_str: &str) -> Option<String> {
    Url::parse(url_str).ok().map(|url| url.scheme().to_string())
}

/// Builds an absolute address from a root-relative link
///
/// `relative_url` is expected to start with `/`.
pub fn resolve_relative(host_port: &str, protocol: &str, relative_url: &str) -> String {
    format!("{}://{}{}", protocol, host_port, relative_url)
}

/// Returns true if both addresses share the same host and port
///
/// Hosts and ports are compared case-insensitively; differing protocols
/// (http vs https) still count as the same site.
pub fn same_site(a: &str, b: &str) -> bool {
    match (host_port(a), host_port(b)) {
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(&b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_port_without_port() {
        assert_eq!(
            host_port("https://blog.example.com/post"),
            Some("blog.example.com".to_string())
        );
    }

    #[test]
    fn test_host_port_with_port() {
        assert_eq!(
            host_port("http://localhost:3000/"),
            Some("localhost:3000".to_string())
        );
    }

    #[test]
    fn test_host_port_default_port_dropped() {
        assert_eq!(
            host_port("http://example.com:80/"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_host_port_malformed() {
        assert_eq!(host_port("/about.html"), None);
        assert_eq!(host_port(""), None);
    }

    #[test]
    fn test_protocol() {
        assert_eq!(protocol("https://example.com"), Some("https".to_string()));
        assert_eq!(protocol("http://example.com"), Some("http".to_string()));
        assert_eq!(protocol("about.html"), None);
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(
            resolve_relative("example.com:8080", "http", "/about.html"),
            "http://example.com:8080/about.html"
        );
    }

    #[test]
    fn test_same_site_ignores_protocol() {
        assert!(same_site("http://abc.com:8080/a", "https://abc.com:8080/b"));
    }

    #[test]
    fn test_same_site_ignores_case() {
        assert!(same_site("https://ABC.com/a", "https://abc.COM/b"));
    }

    #[test]
    fn test_same_site_port_mismatch() {
        assert!(!same_site("http://abc.com:8080/a", "http://abc.com:9090/a"));
        assert!(!same_site("http://abc.com/a", "http://abc.com:9090/a"));
    }

    #[test]
    fn test_same_site_different_host() {
        assert!(!same_site("https://abc.com/", "https://sub.abc.com/"));
        assert!(!same_site("https://abc.com/", "garbage"));
    }
}
