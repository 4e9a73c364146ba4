//! Record types flowing through the pipeline
//!
//! - `UrlRecord`: a `<url>` entry as discovered in a sitemap
//! - `Category`: the coarse classification assigned to a URL
//! - `CategorizedRecord`: a `UrlRecord` paired with its category

mod category;
mod record;

// Re-export main types
pub use category::Category;
pub use record::{CategorizedRecord, UrlRecord};
