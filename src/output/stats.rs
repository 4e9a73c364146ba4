//! Category statistics for an export
//!
//! Counts are reported in descending frequency, the way the summary is logged
//! after every export.

use crate::model::{CategorizedRecord, Category};
use std::collections::HashMap;

/// Per-category record counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySummary {
    /// Categories present in the export, most frequent first
    ///
    /// Equal counts keep the fixed order page, product, collection, blog.
    pub counts: Vec<(Category, u64)>,

    /// Total number of records
    pub total: u64,
}

impl CategorySummary {
    /// Counts records per category
    pub fn from_records(records: &[CategorizedRecord]) -> Self {
        let mut tally: HashMap<Category, u64> = HashMap::new();
        for record in records {
            *tally.entry(record.category).or_insert(0) += 1;
        }

        let mut counts: Vec<(Category, u64)> = Category::all()
            .into_iter()
            .filter_map(|category| tally.get(&category).map(|count| (category, *count)))
            .collect();
        // Stable sort keeps the fixed category order for ties
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            counts,
            total: records.len() as u64,
        }
    }

    /// Returns the count for one category (zero if absent)
    pub fn count(&self, category: Category) -> u64 {
        self.counts
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

/// Logs the summary, one line per category
pub fn log_summary(summary: &CategorySummary) {
    tracing::info!("URL Summary:");
    for (category, count) in &summary.counts {
        tracing::info!("  {}: {}", category, count);
    }
}
