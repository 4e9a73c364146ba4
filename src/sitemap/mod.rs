//! Sitemap module for fetching and traversing sitemap documents
//!
//! This module contains the extraction half of the pipeline:
//! - HTTP fetching of sitemap documents
//! - XML parsing of `<urlset>` and `<sitemapindex>` documents
//! - Recursive expansion of sitemap indexes into a flat record list

mod fetcher;
mod parser;
mod traverser;

pub use fetcher::{build_http_client, Fetcher};
pub use parser::{parse_document, SitemapDocument, SitemapEntry, SITEMAP_NS};
pub use traverser::Traverser;

use crate::categorizer::categorize;
use crate::config::Config;
use crate::output::{export, ExportReport};
use crate::{FetchError, SitemapError};
use std::path::Path;

/// Runs the complete pipeline for one root sitemap
///
/// This is the main entry point. It will:
/// 1. Build the HTTP client from the configuration
/// 2. Fetch and recursively expand the root sitemap
/// 3. Categorize every accumulated URL
/// 4. Export the categorized records and log the category summary
///
/// Nothing is written unless the traversal completes.
///
/// # Arguments
///
/// * `config` - The loaded configuration
/// * `sitemap_url` - URL of the root sitemap or sitemap index
/// * `output` - Destination file; a timestamped name is used when `None`
///
/// # Returns
///
/// * `Ok(ExportReport)` - Path written and per-category counts
/// * `Err(SitemapError)` - The first error encountered
pub async fn process_sitemap(
    config: &Config,
    sitemap_url: &str,
    output: Option<&Path>,
) -> Result<ExportReport, SitemapError> {
    let fetcher = Fetcher::new(&config.fetcher).map_err(|source| FetchError::Request {
        url: sitemap_url.to_string(),
        source,
    })?;

    let records = Traverser::new(&fetcher).run(sitemap_url).await?;
    tracing::debug!("Traversal finished with {} records", records.len());

    let categorized = categorize(&records);
    let report = export(&categorized, output)?;

    Ok(report)
}
