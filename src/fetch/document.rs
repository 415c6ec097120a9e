//! Document retrieval.

use url::Url;

use super::request::RequestHeaders;
use crate::error_handling::OpenGraphError;

/// Fetches a document body as text.
///
/// The body is read chunk by chunk and rejected as soon as it grows past
/// `max_body_size`. Invalid UTF-8 is replaced rather than rejected.
///
/// # Errors
///
/// - `OpenGraphError::Retrieval` on network failure
/// - `OpenGraphError::HttpStatus` on a non-success status
/// - `OpenGraphError::BodyTooLarge` past the size limit
pub async fn fetch_document(
    client: &reqwest::Client,
    url: &Url,
    max_body_size: usize,
) -> Result<String, OpenGraphError> {
    log::debug!("Fetching {}", url);
    let request = RequestHeaders::apply_to_request_builder(client.get(url.clone()));
    let mut response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        log::debug!("{} returned {}", url, status);
        return Err(OpenGraphError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    if response
        .content_length()
        .is_some_and(|len| len > max_body_size as u64)
    {
        return Err(OpenGraphError::BodyTooLarge {
            url: url.to_string(),
            limit: max_body_size,
        });
    }

    let mut body = Vec::with_capacity(max_body_size.min(64 * 1024));
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > max_body_size {
            log::debug!(
                "Body of {} exceeds {} bytes (aborting at {} bytes)",
                url,
                max_body_size,
                body.len() + chunk.len()
            );
            return Err(OpenGraphError::BodyTooLarge {
                url: url.to_string(),
                limit: max_body_size,
            });
        }
        body.extend_from_slice(&chunk);
    }

    log::debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(String::from_utf8_lossy(&body).into_owned())
}
