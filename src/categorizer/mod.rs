//! URL categorization
//!
//! This module assigns every discovered URL a [`Category`] by matching its
//! path against a fixed, ordered rule set. Categorization is total: a URL that
//! matches no rule is a `page`.

mod rules;

pub use rules::classify_path;

use crate::model::{CategorizedRecord, Category, UrlRecord};

/// Categorizes a list of URL records, preserving input order
///
/// Always produces exactly one output record per input record.
///
/// # Example
///
/// ```
/// use sitemap_sorter::{categorize, Category, UrlRecord};
///
/// let records = vec![
///     UrlRecord::new("https://example.com/products/widget/", None),
///     UrlRecord::new("https://example.com/about/", Some("2024-01-01".to_string())),
/// ];
/// let categorized = categorize(&records);
/// assert_eq!(categorized[0].category, Category::Product);
/// assert_eq!(categorized[1].category, Category::Page);
/// assert_eq!(categorized[1].lastmod.as_deref(), Some("2024-01-01"));
/// ```
pub fn categorize(records: &[UrlRecord]) -> Vec<CategorizedRecord> {
    records
        .iter()
        .map(|record| CategorizedRecord {
            url: record.url.clone(),
            category: classify_url(&record.url),
            lastmod: record.lastmod.clone(),
        })
        .collect()
}

/// Classifies a single URL by its path component
///
/// Query string and fragment never take part in matching. The path is taken
/// as written, without dot-segment or percent-encoding normalization. A
/// string without a `scheme://authority` prefix is treated as a bare path.
pub fn classify_url(url: &str) -> Category {
    classify_path(extract_path(url))
}

/// Extracts the raw path component of a URL
fn extract_path(url: &str) -> &str {
    let rest = match url.split_once("://") {
        Some((scheme, after)) if is_scheme(scheme) => match after.find(['/', '?', '#']) {
            Some(start) => &after[start..],
            None => "",
        },
        _ => url,
    };

    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    &rest[..end]
}

/// Returns true for a syntactically valid URL scheme
fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
