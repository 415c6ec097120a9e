//! Heuristic recovery of properties a document did not declare.
//!
//! Each target property has an ordered chain of [`MiningStep`]s. Steps are
//! tried in order and the first non-blank result is stored; a property that
//! is already declared with a non-blank value is never touched.
//!
//! - `title`: `<title>`, then a top-level `<h1>`
//! - `description`: `<meta name="description">`, then the first `<p>`, then
//!   the first `<div>`

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::error_handling::WarningType;
use crate::fetch::favicon_url;
use crate::opengraph::PropertyMap;
use crate::utils::sanitize::{is_blank, is_missing, normalize_text};

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
// The parser always wraps content in html/body, so the top level of a
// document is the body's direct children.
const TOP_LEVEL_H1_SELECTOR_STR: &str = "body > h1";
const META_NAME_SELECTOR_STR: &str = "meta[name]";
const PARAGRAPH_SELECTOR_STR: &str = "p";
const DIV_SELECTOR_STR: &str = "div";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_with_fallback(TITLE_SELECTOR_STR, "title mining"));

static TOP_LEVEL_H1_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_with_fallback(TOP_LEVEL_H1_SELECTOR_STR, "title mining")
});

static META_NAME_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_with_fallback(META_NAME_SELECTOR_STR, "description mining")
});

static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_with_fallback(PARAGRAPH_SELECTOR_STR, "description mining")
});

static DIV_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_with_fallback(DIV_SELECTOR_STR, "description mining"));

/// One step of a fallback chain.
#[derive(Clone, Copy)]
pub struct MiningStep {
    /// Where the value comes from, for logging
    pub source: &'static str,
    /// Returns the candidate value, or `None` if the step does not apply
    pub extract: fn(&Html) -> Option<String>,
}

impl std::fmt::Debug for MiningStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiningStep")
            .field("source", &self.source)
            .finish()
    }
}

/// Fallback chain for `title`.
pub const TITLE_CHAIN: &[MiningStep] = &[
    MiningStep {
        source: "<title>",
        extract: title_element_text,
    },
    MiningStep {
        source: "top-level <h1>",
        extract: top_level_h1_text,
    },
];

/// Fallback chain for `description`.
pub const DESCRIPTION_CHAIN: &[MiningStep] = &[
    MiningStep {
        source: "<meta name=\"description\">",
        extract: meta_description_content,
    },
    MiningStep {
        source: "first <p>",
        extract: first_paragraph_text,
    },
    MiningStep {
        source: "first <div>",
        extract: first_div_text,
    },
];

/// Target properties with their chains and the warning logged on a miss.
const MINED_PROPERTIES: [(&str, &[MiningStep], WarningType); 2] = [
    ("title", TITLE_CHAIN, WarningType::MissingTitle),
    ("description", DESCRIPTION_CHAIN, WarningType::MissingDescription),
];

fn element_text(element: ElementRef<'_>) -> String {
    normalize_text(&element.text().collect::<String>())
}

/// First non-blank `<title>` anywhere in the document.
fn title_element_text(document: &Html) -> Option<String> {
    document
        .select(&TITLE_SELECTOR)
        .map(element_text)
        .find(|text| !is_blank(text))
}

/// First non-blank `<h1>` directly under `<body>`.
fn top_level_h1_text(document: &Html) -> Option<String> {
    document
        .select(&TOP_LEVEL_H1_SELECTOR)
        .map(element_text)
        .find(|text| !is_blank(text))
}

/// Content of the first `<meta>` named `description` (any case).
fn meta_description_content(document: &Html) -> Option<String> {
    document
        .select(&META_NAME_SELECTOR)
        .find(|element| {
            element
                .value()
                .attr("name")
                .is_some_and(|name| name.eq_ignore_ascii_case("description"))
        })
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
}

/// Text of the first `<p>`.
fn first_paragraph_text(document: &Html) -> Option<String> {
    document.select(&PARAGRAPH_SELECTOR).next().map(element_text)
}

/// Text of the first `<div>`.
fn first_div_text(document: &Html) -> Option<String> {
    document.select(&DIV_SELECTOR).next().map(element_text)
}

/// Runs a chain and returns the first non-blank value with its step.
pub fn run_chain(document: &Html, chain: &[MiningStep]) -> Option<(&'static str, String)> {
    chain.iter().find_map(|step| {
        (step.extract)(document)
            .filter(|value| !is_blank(value))
            .map(|value| (step.source, value))
    })
}

/// Fills blank or absent `title` and `description` from the document.
///
/// Idempotent: on a map whose targets are already non-blank it changes
/// nothing.
pub fn mine_missing(document: &Html, properties: &mut PropertyMap) {
    for (property, chain, warning) in MINED_PROPERTIES {
        if !is_missing(properties.get(property).map(String::as_str)) {
            continue;
        }

        match run_chain(document, chain) {
            Some((source, value)) => {
                log::debug!("Mined {} from {}: {:?}", property, source, value);
                properties.insert(property.to_string(), value);
            }
            None => {
                log::debug!("{}: no fallback matched", warning.as_str());
            }
        }
    }
}

/// Points a blank or absent `image` at the page's favicon.
pub fn mine_image(document: &Html, properties: &mut PropertyMap, source_url: &Url) {
    if !is_missing(properties.get("image").map(String::as_str)) {
        return;
    }

    if let Some(url) = favicon_url(document, source_url) {
        log::debug!("Using favicon as image: {}", url);
        properties.insert("image".to_string(), url);
    }
}
