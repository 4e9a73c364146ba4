//! URL category definitions
//!
//! Every exported URL carries exactly one of these categories.

use std::fmt;

/// Coarse category assigned to a URL by its path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Category {
    /// Anything that matches no other rule
    #[default]
    Page,

    /// `/product/<handle>` or `/products/<handle>`
    Product,

    /// `/collection/<handle>` or `/collections/<handle>`
    Collection,

    /// `/blog/<blog>/<post>` or `/blogs/<blog>/<post>`
    Blog,
}

impl Category {
    /// Returns the lowercase name written to reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Product => "product",
            Self::Collection => "collection",
            Self::Blog => "blog",
        }
    }

    /// Returns all categories in their fixed display order
    pub fn all() -> [Self; 4] {
        [Self::Page, Self::Product, Self::Collection, Self::Blog]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
