//! Favicon discovery for the image fallback.
//!
//! Finds the page's declared icon and resolves it against the page URL,
//! falling back to `{origin}/favicon.ico` when the page declares none.

use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("link[rel][href]", "LINK_SELECTOR"));

/// Returns the `href` of the first `<link>` whose `rel` is `icon` or
/// `shortcut icon`.
pub(crate) fn declared_favicon_href(document: &Html) -> Option<&str> {
    document
        .select(&LINK_SELECTOR)
        .find(|element| {
            element.value().attr("rel").is_some_and(|rel| {
                let rel = rel.trim();
                rel.eq_ignore_ascii_case("icon") || rel.eq_ignore_ascii_case("shortcut icon")
            })
        })
        .and_then(|element| element.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
}

/// Resolves a potentially-relative favicon href against the page URL.
///
/// Absolute, protocol-relative and path-relative hrefs are all handled by
/// `Url::join`.
pub(crate) fn resolve_favicon_url(href: &str, base_url: &Url) -> Option<String> {
    base_url.join(href).ok().map(String::from)
}

/// Builds the fallback `/favicon.ico` URL from the page URL's origin.
pub(crate) fn fallback_favicon_url(base_url: &Url) -> Option<String> {
    let host = base_url.host_str()?;
    Some(match base_url.port() {
        Some(port) => format!("{}://{}:{}/favicon.ico", base_url.scheme(), host, port),
        None => format!("{}://{}/favicon.ico", base_url.scheme(), host),
    })
}

/// Favicon URL for a page: the declared icon if any, else the origin default.
pub(crate) fn favicon_url(document: &Html, base_url: &Url) -> Option<String> {
    match declared_favicon_href(document) {
        Some(href) => resolve_favicon_url(href, base_url),
        None => fallback_favicon_url(base_url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn test_resolve_favicon_url_absolute() {
        let result = resolve_favicon_url(
            "https://cdn.example.com/icon.png",
            &base("https://example.com"),
        );
        assert_eq!(result, Some("https://cdn.example.com/icon.png".to_string()));
    }

    #[test]
    fn test_resolve_favicon_url_relative() {
        let result = resolve_favicon_url("/img/favicon.png", &base("https://example.com/page"));
        assert_eq!(
            result,
            Some("https://example.com/img/favicon.png".to_string())
        );
    }

    #[test]
    fn test_resolve_favicon_url_protocol_relative() {
        let result = resolve_favicon_url("//cdn.example.com/icon.png", &base("http://example.com"));
        assert_eq!(result, Some("http://cdn.example.com/icon.png".to_string()));
    }

    #[test]
    fn test_fallback_favicon_url() {
        let result = fallback_favicon_url(&base("https://example.com/some/page"));
        assert_eq!(result, Some("https://example.com/favicon.ico".to_string()));
    }

    #[test]
    fn test_fallback_favicon_url_with_port() {
        let result = fallback_favicon_url(&base("https://example.com:8443/page"));
        assert_eq!(
            result,
            Some("https://example.com:8443/favicon.ico".to_string())
        );
    }

    #[test]
    fn test_declared_favicon_href() {
        let document = Html::parse_document(
            r#"<html><head>
                <link rel="stylesheet" href="/site.css">
                <link rel="Shortcut Icon" href="/static/fav.png">
            </head></html>"#,
        );
        assert_eq!(declared_favicon_href(&document), Some("/static/fav.png"));
        assert_eq!(
            favicon_url(&document, &base("https://example.com/a/b")),
            Some("https://example.com/static/fav.png".to_string())
        );
    }

    #[test]
    fn test_favicon_url_without_declared_icon() {
        let document = Html::parse_document("<html><head></head></html>");
        assert_eq!(
            favicon_url(&document, &base("https://example.com/a/b")),
            Some("https://example.com/favicon.ico".to_string())
        );
    }
}
