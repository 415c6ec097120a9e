//! Open Graph property harvesting.
//!
//! Walks every `<meta>` element in document order and collects declared
//! properties into a [`PropertyMap`] keyed by bare property name.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::config::OG_PREFIX;
use crate::opengraph::PropertyMap;
use crate::utils::sanitize::strip_og_prefix;

const META_SELECTOR_STR: &str = "meta";

static META_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_with_fallback(META_SELECTOR_STR, "property harvesting")
});

/// Harvests meta properties from a parsed document.
///
/// - `<meta property="og:x" content="...">` and `<meta name="og:x" ...>`
///   are stored under `x`.
/// - When `mine_extra_information` is set, any other `<meta name="y">` is
///   stored under `y`.
///
/// Later declarations overwrite earlier ones. A missing `content` attribute
/// is stored as an empty value. Character references are decoded by the
/// HTML parser.
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `mine_extra_information` - Also harvest plain `name=` meta tags
pub fn harvest_properties(document: &Html, mine_extra_information: bool) -> PropertyMap {
    let mut properties = PropertyMap::new();

    for element in document.select(&META_SELECTOR) {
        let meta = element.value();
        let content = meta.attr("content").unwrap_or_default();

        if let Some(name) = meta
            .attr("property")
            .and_then(|property| property.strip_prefix(OG_PREFIX))
        {
            properties.insert(name.to_string(), content.to_string());
        } else if let Some(name) = meta.attr("name") {
            if mine_extra_information || name.starts_with(OG_PREFIX) {
                properties.insert(strip_og_prefix(name).to_string(), content.to_string());
            }
        }
    }

    log::debug!("Harvested {} meta properties", properties.len());
    properties
}
