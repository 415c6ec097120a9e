//! Text helpers shared by the harvester, the miner and the entity.
//!
//! Covers blank detection, `og:` prefix handling, whitespace normalization of
//! extracted element text, and attribute escaping for rendered markup.

use std::borrow::Cow;

use crate::config::OG_PREFIX;

/// True for empty and whitespace-only values.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// True if the property is absent or blank.
pub fn is_missing(value: Option<&str>) -> bool {
    value.is_none_or(is_blank)
}

/// Strips one leading `og:` from a property name.
///
/// Only the first occurrence is removed, so `og:og:x` becomes `og:x`.
pub fn strip_og_prefix(name: &str) -> &str {
    name.strip_prefix(OG_PREFIX).unwrap_or(name)
}

/// Collapses runs of whitespace in element text to single spaces and trims
/// the ends.
///
/// Text gathered from nested inline elements keeps the source's line breaks
/// and indentation; stored values should not.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Escapes a value for use inside a double-quoted attribute.
///
/// Carriage returns are written as `&#13;` because the HTML parser folds raw
/// `\r\n` and `\r` into `\n`. NUL cannot be represented and reads back as
/// U+FFFD.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    let escaped = html_escape::encode_double_quoted_attribute(value);
    if escaped.contains('\r') {
        Cow::Owned(escaped.replace('\r', "&#13;"))
    } else {
        escaped
    }
}
