//! Path-pattern rules
//!
//! Rules are evaluated in order and the first match wins. Patterns are
//! anchored at the end of the path (with an optional trailing slash) but not at
//! the start, so `/en/products/widget` is still a product.

use crate::model::Category;
use regex::Regex;
use std::sync::LazyLock;

static PRODUCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/products?/[^/]+/?$").expect("valid product pattern"));

static COLLECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/collections?/[^/]+/?$").expect("valid collection pattern"));

static BLOG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/blogs?/[^/]+/[^/]+/?$").expect("valid blog pattern"));

/// Classifies a URL path
///
/// # Rules
///
/// | Order | Pattern | Category |
/// |-------|---------|----------|
/// | 1 | `/product(s)/<segment>` | product |
/// | 2 | `/collection(s)/<segment>` | collection |
/// | 3 | `/blog(s)/<segment>/<segment>` | blog |
/// | 4 | anything else | page |
///
/// # Examples
///
/// ```
/// use sitemap_sorter::categorizer::classify_path;
/// use sitemap_sorter::Category;
///
/// assert_eq!(classify_path("/products/widget/"), Category::Product);
/// assert_eq!(classify_path("/blogs/news/my-post"), Category::Blog);
/// assert_eq!(classify_path("/about/"), Category::Page);
/// ```
pub fn classify_path(path: &str) -> Category {
    let rules: [(&Regex, Category); 3] = [
        (&*PRODUCT_RE, Category::Product),
        (&*COLLECTION_RE, Category::Collection),
        (&*BLOG_RE, Category::Blog),
    ];

    rules
        .iter()
        .find(|(pattern, _)| pattern.is_match(path))
        .map(|(_, category)| *category)
        .unwrap_or_default()
}
