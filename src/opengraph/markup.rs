//! Rendering an entity back to `<meta>` markup.

use serde::Serialize;

use super::OpenGraph;
use crate::config::OG_PREFIX;
use crate::utils::sanitize::escape_attribute;

/// Attribute that carries the property name in rendered markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupStyle {
    /// `<meta property="og:title" ... />` (RDFa, the HTML form)
    Property,
    /// `<meta name="og:title" ... />` (the XHTML form)
    Name,
}

impl MarkupStyle {
    fn attribute(&self) -> &'static str {
        match self {
            MarkupStyle::Property => "property",
            MarkupStyle::Name => "name",
        }
    }
}

impl OpenGraph {
    /// Renders one `<meta>` element per property, ordered by property name.
    ///
    /// Names and values are escaped for double-quoted attributes.
    pub fn to_meta_markup(&self, style: MarkupStyle) -> Vec<String> {
        let attribute = style.attribute();
        self.list_properties()
            .into_iter()
            .map(|key| {
                let value = self.properties.get(key).map(String::as_str).unwrap_or_default();
                format!(
                    r#"<meta {}="{}{}" content="{}" />"#,
                    attribute,
                    OG_PREFIX,
                    escape_attribute(key),
                    escape_attribute(value)
                )
            })
            .collect()
    }

    /// Markup in the `property=` form.
    pub fn to_html(&self) -> Vec<String> {
        self.to_meta_markup(MarkupStyle::Property)
    }

    /// Markup in the `name=` form.
    pub fn to_xhtml(&self) -> Vec<String> {
        self.to_meta_markup(MarkupStyle::Name)
    }
}
