//! Configuration module for Sitemap-Sorter
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, so running without a file is
//! equivalent to loading an empty one.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_sorter::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sitemap-sorter.toml")).unwrap();
//! println!("Fetch timeout: {}s", config.fetcher.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetcherConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{load_config, load_optional_config, parse_config};
pub use validation::validate;
