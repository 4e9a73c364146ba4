use crate::model::Category;

/// A URL entry extracted from a `<urlset>` document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    /// Text of the `<loc>` element
    pub url: String,

    /// Text of the `<lastmod>` element, carried through unvalidated
    pub lastmod: Option<String>,
}

impl UrlRecord {
    pub fn new(url: impl Into<String>, lastmod: Option<String>) -> Self {
        Self {
            url: url.into(),
            lastmod,
        }
    }
}

/// A URL entry with its assigned category, ready for export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizedRecord {
    pub url: String,
    pub category: Category,
    pub lastmod: Option<String>,
}

impl CategorizedRecord {
    /// Returns the lastmod value as a cell string (blank when absent)
    pub fn lastmod_cell(&self) -> &str {
        self.lastmod.as_deref().unwrap_or("")
    }
}
