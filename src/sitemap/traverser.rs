//! Recursive sitemap traversal
//!
//! The traverser owns the accumulation list for one run. Sitemap indexes are
//! expanded depth-first in document order: each sub-sitemap is fetched and
//! fully parsed before the next sibling is touched. URL entries are appended
//! in discovery order and never deduplicated.

use crate::model::UrlRecord;
use crate::sitemap::fetcher::Fetcher;
use crate::sitemap::parser::parse_document;
use crate::{Result, SitemapError};

/// Label used as the parent of documents handed to `parse` directly
const INLINE_SOURCE: &str = "<inline document>";

/// Walks a sitemap tree and accumulates its URL entries
pub struct Traverser<'a> {
    fetcher: &'a Fetcher,

    /// Accumulated records, in discovery order
    records: Vec<UrlRecord>,

    /// Sitemap URLs currently being expanded (root first)
    chain: Vec<String>,
}

impl<'a> Traverser<'a> {
    /// Creates a traverser with an empty accumulation list
    pub fn new(fetcher: &'a Fetcher) -> Self {
        Self {
            fetcher,
            records: Vec::new(),
            chain: Vec::new(),
        }
    }

    /// Fetches the root sitemap, expands it completely and returns every record
    ///
    /// Any failure aborts the whole traversal; records gathered before the
    /// failure are discarded with the traverser.
    pub async fn run(mut self, root_url: &str) -> Result<Vec<UrlRecord>> {
        let content = self.fetcher.fetch(root_url).await?;
        self.chain.push(root_url.to_string());
        self.expand(&content, root_url).await?;
        Ok(self.records)
    }

    /// Parses an already fetched document into the accumulation list
    ///
    /// Sub-sitemaps referenced by the document are fetched and parsed
    /// recursively before its own URL entries are appended.
    pub async fn parse(&mut self, xml: &str) -> Result<()> {
        self.expand(xml, INLINE_SOURCE).await
    }

    async fn expand(&mut self, xml: &str, source: &str) -> Result<()> {
        let document = parse_document(xml).inspect_err(|e| {
            tracing::error!("Error parsing XML from {}: {}", source, e);
        })?;

        if document.is_index() {
            tracing::info!(
                "Found a sitemap index with {} sub-sitemaps, processing sub-sitemaps",
                document.sitemaps.len()
            );
        }

        for entry in &document.sitemaps {
            let loc = entry
                .loc
                .as_deref()
                .ok_or_else(|| SitemapError::MissingSitemapLoc {
                    parent: source.to_string(),
                })?;

            if self.chain.iter().any(|ancestor| ancestor == loc) {
                return Err(SitemapError::CycleDetected {
                    url: loc.to_string(),
                });
            }

            let content = self.fetcher.fetch(loc).await?;

            self.chain.push(loc.to_string());
            let result = Box::pin(self.expand(&content, loc)).await;
            self.chain.pop();
            result?;
        }

        self.records.extend(document.urls);
        tracing::info!("Found {} URLs in total", self.records.len());

        Ok(())
    }
}
