//! URL validation and normalization for documents to read.

use log::warn;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::OpenGraphError;

/// Validates and normalizes the address of a document to read.
///
/// Adds an `https://` prefix if no scheme is given, then requires a
/// syntactically valid `http`/`https` URL with a host, no longer than
/// [`MAX_URL_LENGTH`].
///
/// # Errors
///
/// `OpenGraphError::InvalidUrl` if the URL does not parse,
/// `OpenGraphError::UnsupportedUrl` if it is too long, has another scheme,
/// or has no host.
pub fn parse_document_url(url: &str) -> Result<Url, OpenGraphError> {
    let url = url.trim();
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {})",
            url.len(),
            MAX_URL_LENGTH
        );
        return Err(OpenGraphError::UnsupportedUrl(format!(
            "URL exceeds {} characters",
            MAX_URL_LENGTH
        )));
    }

    let normalized = if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    let parsed = Url::parse(&normalized)?;
    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(OpenGraphError::UnsupportedUrl(format!(
                "scheme '{}' is not supported (only http:// and https://): {}",
                scheme, url
            )));
        }
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(OpenGraphError::UnsupportedUrl(format!(
            "URL has no host: {url}"
        )));
    }

    Ok(parsed)
}
