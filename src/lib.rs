//! Sitemap-Sorter: sitemap URL extraction and categorization
//!
//! This crate fetches an XML sitemap (following sitemap indexes into their
//! sub-sitemaps), sorts every discovered URL into a coarse category based on
//! its path, and exports the result as a spreadsheet.

pub mod categorizer;
pub mod config;
pub mod model;
pub mod output;
pub mod sitemap;

use thiserror::Error;

/// Main error type for Sitemap-Sorter operations
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Export error: {0}")]
    Export(#[from] output::ExportError),

    #[error("Sitemap index entry without <loc> in {parent}")]
    MissingSitemapLoc { parent: String },

    #[error("Sitemap cycle detected: {url} is already being expanded")]
    CycleDetected { url: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised while retrieving a sitemap document
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid sitemap URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("HTTP error for {url}: {source}")]
    Request { url: String, source: reqwest::Error },
}

/// XML well-formedness errors
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed XML at byte {position}: {source}")]
    Xml {
        position: u64,
        source: quick_xml::Error,
    },

    #[error("Malformed attribute at byte {position}: {source}")]
    Attribute {
        position: u64,
        source: quick_xml::events::attributes::AttrError,
    },

    #[error("Unclosed element <{0}> at end of document")]
    UnclosedElement(String),

    #[error("Document has no root element")]
    MissingRoot,

    #[error("Content outside the root element")]
    ContentOutsideRoot,

    #[error("Unbound namespace prefix on <{0}>")]
    UnboundPrefix(String),
}

/// Result type alias for Sitemap-Sorter operations
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use categorizer::{categorize, classify_url};
pub use config::Config;
pub use model::{CategorizedRecord, Category, UrlRecord};
pub use output::{export, ExportReport};
pub use sitemap::{Fetcher, Traverser};
