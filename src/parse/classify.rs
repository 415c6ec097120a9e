//! Base-type classification.

use strum::IntoEnumIterator;

use crate::taxonomy::BaseType;

/// Resolves a declared `og:type` to its base category.
///
/// The match is exact and case-sensitive. Categories are searched in
/// declaration order; the reference table has no overlaps, so the order
/// does not affect the result (see [`find_overlapping_types`]).
pub fn classify(og_type: &str) -> Option<BaseType> {
    BaseType::iter().find(|base| base.contains(og_type))
}

/// Specific types listed under more than one category, with every category
/// that lists them.
///
/// Classification of any type reported here depends on search order.
pub fn find_overlapping_types() -> Vec<(&'static str, Vec<BaseType>)> {
    let mut overlaps: Vec<(&'static str, Vec<BaseType>)> = Vec::new();
    for base in BaseType::iter() {
        for &specific in base.specific_types() {
            if overlaps.iter().any(|(seen, _)| *seen == specific) {
                continue;
            }
            let owners: Vec<BaseType> = BaseType::iter().filter(|b| b.contains(specific)).collect();
            if owners.len() > 1 {
                overlaps.push((specific, owners));
            }
        }
    }
    overlaps
}
