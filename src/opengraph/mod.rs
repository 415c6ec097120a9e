//! The Open Graph entity.
//!
//! An [`OpenGraph`] is a property bag keyed by bare property names (`title`,
//! not `og:title`). It is either read from a document by the
//! [`Reader`](crate::Reader) or built by hand, and tracks whether it has been
//! mutated since construction.

mod markup;

use std::collections::HashMap;

use serde::Serialize;
use url::Url;

use crate::taxonomy::BaseType;
use crate::utils::sanitize::strip_og_prefix;

pub use markup::MarkupStyle;

/// Open Graph properties keyed by bare name.
pub type PropertyMap = HashMap<String, String>;

/// Open Graph metadata of one page.
///
/// # Examples
///
/// ```
/// use opengraph::{MarkupStyle, OpenGraph};
///
/// let mut og = OpenGraph::new();
/// og.set_property("og:title", "The Rock");
/// og.set_property("type", "movie");
///
/// assert_eq!(og.get_property("title"), Some("The Rock"));
/// assert!(og.has_changed());
/// assert_eq!(
///     og.to_meta_markup(MarkupStyle::Property)[0],
///     r#"<meta property="og:title" content="The Rock" />"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OpenGraph {
    source_url: Option<Url>,
    properties: PropertyMap,
    base_type: Option<BaseType>,
    from_source: bool,
    changed: bool,
}

impl OpenGraph {
    /// Creates an empty entity for building Open Graph data from scratch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an entity from the result of reading a document.
    pub(crate) fn from_document(
        source_url: Option<Url>,
        properties: PropertyMap,
        base_type: Option<BaseType>,
    ) -> Self {
        Self {
            source_url,
            properties,
            base_type,
            from_source: true,
            changed: false,
        }
    }

    /// Returns the value of a property, or `None` if it is not defined.
    ///
    /// The name may be given with or without the `og:` prefix.
    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.properties
            .get(strip_og_prefix(name))
            .map(String::as_str)
    }

    /// The base type the declared `type` resolved to, if any.
    pub fn base_type(&self) -> Option<BaseType> {
        self.base_type
    }

    /// The address the entity was read from. `None` for hand-built entities
    /// and for documents read from a string without a URL.
    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_ref().map(Url::as_str)
    }

    /// Names of all defined properties, sorted.
    pub fn list_properties(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.properties.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Read-only view of the property map.
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Number of defined properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True if no property is defined.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Sets a property, stripping a leading `og:` from the name.
    ///
    /// Marks the entity as changed on every call, even if the value is the
    /// same as before.
    pub fn set_property(&mut self, name: &str, value: impl Into<String>) {
        self.changed = true;
        self.properties
            .insert(strip_og_prefix(name).to_string(), value.into());
    }

    /// Removes a property, stripping a leading `og:` from the name, and
    /// returns its previous value.
    ///
    /// Marks the entity as changed even when the property was not defined.
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        self.changed = true;
        self.properties.remove(strip_og_prefix(name))
    }

    /// True if the entity was read from a document.
    pub fn is_from_source(&self) -> bool {
        self.from_source
    }

    /// True once `set_property` or `remove_property` has been called.
    pub fn has_changed(&self) -> bool {
        self.changed
    }
}
