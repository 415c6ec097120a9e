//! Required-property validation.

use crate::config::REQUIRED_PROPERTIES;
use crate::error_handling::OpenGraphError;
use crate::opengraph::PropertyMap;

/// Required properties that are not keys of `properties`, in the order of
/// [`REQUIRED_PROPERTIES`].
///
/// Only key presence is checked; blank values count as present.
pub fn missing_required(properties: &PropertyMap) -> Vec<&'static str> {
    REQUIRED_PROPERTIES
        .iter()
        .copied()
        .filter(|name| !properties.contains_key(*name))
        .collect()
}

/// Checks that a harvested map conforms to the Open Graph protocol.
///
/// With `ignore_specification_errors` set this never fails.
///
/// # Errors
///
/// Returns `OpenGraphError::SpecificationViolation` listing every missing
/// required property.
pub fn validate_required(
    properties: &PropertyMap,
    ignore_specification_errors: bool,
) -> Result<(), OpenGraphError> {
    if ignore_specification_errors {
        return Ok(());
    }

    let missing = missing_required(properties);
    if missing.is_empty() {
        Ok(())
    } else {
        log::warn!(
            "Document does not conform to the Open Graph protocol, missing: {}",
            missing.join(", ")
        );
        Err(OpenGraphError::SpecificationViolation {
            missing: missing.into_iter().map(String::from).collect(),
        })
    }
}
