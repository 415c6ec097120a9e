//! Reading Open Graph metadata from documents.
//!
//! The [`Reader`] runs the extraction pipeline: harvest the meta properties,
//! validate the required set, default the type, classify it, mine whatever is
//! still missing, and hand the result to a new [`OpenGraph`]. Everything after
//! retrieval is synchronous; the reader holds only its configuration, so one
//! instance can serve any number of concurrent reads.

use log::{debug, info};
use scraper::Html;
use url::Url;

use crate::config::{ReaderConfig, DEFAULT_OG_TYPE, HEAD_CLOSE_TAG};
use crate::error_handling::{Result, WarningType};
use crate::fetch::{fetch_document, parse_document_url};
use crate::initialization::init_client;
use crate::opengraph::OpenGraph;
use crate::parse::{classify, harvest_properties, mine_image, mine_missing, validate_required};

/// Reads Open Graph metadata according to a [`ReaderConfig`].
///
/// # Examples
///
/// ```
/// use opengraph::{BaseType, Reader};
///
/// let html = r#"<html><head>
///     <meta property="og:title" content="The Rock" />
///     <meta property="og:type" content="movie" />
/// </head></html>"#;
///
/// let og = Reader::default().read_str(html, None)?;
/// assert_eq!(og.get_property("title"), Some("The Rock"));
/// assert_eq!(og.base_type(), Some(BaseType::Product));
/// # Ok::<(), opengraph::OpenGraphError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reader {
    config: ReaderConfig,
}

impl Reader {
    /// Creates a reader with the given configuration.
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// The reader's configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Fetches `url` and reads its Open Graph metadata.
    ///
    /// A client is built from the configuration for this call; use
    /// [`Reader::read_with_client`] to share one across reads.
    ///
    /// # Errors
    ///
    /// Fails fast on an invalid configuration or malformed URL, then on
    /// retrieval failure, then with `SpecificationViolation` if required
    /// properties are missing and specification errors are not ignored.
    pub async fn read(&self, url: &str) -> Result<OpenGraph> {
        self.config.validate()?;
        let url = parse_document_url(url)?;
        let client = init_client(&self.config)?;
        self.read_url(&client, url).await
    }

    /// Like [`Reader::read`], with a caller-provided HTTP client.
    ///
    /// # Errors
    ///
    /// Same as [`Reader::read`].
    pub async fn read_with_client(&self, client: &reqwest::Client, url: &str) -> Result<OpenGraph> {
        self.config.validate()?;
        let url = parse_document_url(url)?;
        self.read_url(client, url).await
    }

    async fn read_url(&self, client: &reqwest::Client, url: Url) -> Result<OpenGraph> {
        let body = fetch_document(client, &url, self.config.max_body_size).await?;
        let og = self.read_markup(&body, Some(url))?;
        info!(
            "Read {} properties from {} (base type: {})",
            og.len(),
            og.source_url().unwrap_or_default(),
            og.base_type().map(|b| b.as_str()).unwrap_or("none")
        );
        Ok(og)
    }

    /// Reads Open Graph metadata from markup already in memory.
    ///
    /// `source_url` is recorded on the entity and used to resolve the favicon
    /// fallback; it is not fetched.
    ///
    /// # Errors
    ///
    /// `InvalidUrl`/`UnsupportedUrl` for a bad `source_url`,
    /// `SpecificationViolation` as for [`Reader::read`].
    pub fn read_str(&self, html: &str, source_url: Option<&str>) -> Result<OpenGraph> {
        let source_url = source_url.map(parse_document_url).transpose()?;
        self.read_markup(html, source_url)
    }

    fn read_markup(&self, html: &str, source_url: Option<Url>) -> Result<OpenGraph> {
        let html = if self.config.head_only {
            truncate_after_head(html)
        } else {
            html
        };
        let document = Html::parse_document(html);
        self.read_document(&document, source_url)
    }

    /// Runs the pipeline over a parsed document.
    ///
    /// # Errors
    ///
    /// `OpenGraphError::SpecificationViolation` if required properties are
    /// missing and specification errors are not ignored.
    pub fn read_document(&self, document: &Html, source_url: Option<Url>) -> Result<OpenGraph> {
        let mut properties = harvest_properties(document, self.config.mine_extra_information);

        validate_required(&properties, self.config.ignore_specification_errors)?;

        let og_type = properties
            .entry("type".to_string())
            .or_insert_with(|| DEFAULT_OG_TYPE.to_string());
        let base_type = classify(og_type);
        match base_type {
            Some(base) => debug!("Type {:?} classified as {}", og_type, base),
            None => debug!("{}: {:?}", WarningType::UnresolvedType.as_str(), og_type),
        }

        if self.config.mine_extra_information {
            mine_missing(document, &mut properties);
        }
        if self.config.favicon_fallback {
            if let Some(url) = &source_url {
                mine_image(document, &mut properties, url);
            }
        }

        Ok(OpenGraph::from_document(source_url, properties, base_type))
    }
}

/// Cuts markup after the first `</head>` (any case).
///
/// Markup without a closing head tag is returned unchanged.
pub fn truncate_after_head(html: &str) -> &str {
    // ASCII lowercasing keeps byte offsets aligned with the input
    let lowered = html.to_ascii_lowercase();
    match lowered.find(HEAD_CLOSE_TAG) {
        Some(index) => &html[..index + HEAD_CLOSE_TAG.len()],
        None => html,
    }
}

/// Convenience wrapper: reads `url` with the default configuration.
///
/// # Errors
///
/// Same as [`Reader::read`].
pub async fn read(url: &str) -> Result<OpenGraph> {
    Reader::default().read(url).await
}

impl From<ReaderConfig> for Reader {
    fn from(config: ReaderConfig) -> Self {
        Self::new(config)
    }
}
