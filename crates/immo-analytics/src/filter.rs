//! Free-text property search.

use std::borrow::Cow;

use immo_core::PropertyRecord;

/// Returns true if `property` matches an already lower-cased needle.
fn matches_query(property: &PropertyRecord, needle: &str) -> bool {
    property
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Filters properties by a case-insensitive substring.
///
/// The query is matched against name, type, address, city, postal code and
/// country; absent fields match as `""`. A blank query borrows the input
/// unchanged. A non-blank query is lower-cased but not trimmed.
///
/// # Example
///
/// ```
/// use immo_analytics::filter_properties;
/// use immo_core::PropertyRecord;
///
/// let props = vec![
///     PropertyRecord::builder("Maison").city("Lyon").build(),
///     PropertyRecord::builder("Studio").city("Lille").build(),
/// ];
/// assert_eq!(filter_properties(&props, "LYON").len(), 1);
/// assert_eq!(filter_properties(&props, "  ").len(), 2);
/// ```
#[must_use]
pub fn filter_properties<'a>(
    properties: &'a [PropertyRecord],
    query: &str,
) -> Cow<'a, [PropertyRecord]> {
    if query.trim().is_empty() {
        return Cow::Borrowed(properties);
    }

    let needle = query.to_lowercase();
    Cow::Owned(
        properties
            .iter()
            .filter(|p| matches_query(p, &needle))
            .cloned()
            .collect(),
    )
}
