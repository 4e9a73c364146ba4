//! Sitemap XML parser
//!
//! This module streams a sitemap document through a namespace-aware reader
//! and extracts:
//! - `<sitemap>` entries (sitemap index documents)
//! - `<url>` entries with their `<loc>` and `<lastmod>` children
//!
//! Only elements in the Sitemaps 0.9 namespace are considered. A document in
//! another namespace (or none) is well-formed but yields nothing. No tree is
//! built, so nesting depth is bounded by memory rather than the call stack.

use crate::model::UrlRecord;
use crate::ParseError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

/// Namespace all sitemap element lookups are scoped to
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// A `<sitemap>` entry from a sitemap index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    /// Location of the sub-sitemap (`None` when `<loc>` is missing or empty)
    pub loc: Option<String>,
}

/// Entries extracted from one sitemap document, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitemapDocument {
    /// Sub-sitemaps referenced by a sitemap index
    pub sitemaps: Vec<SitemapEntry>,

    /// URL entries with a non-empty `<loc>`
    pub urls: Vec<UrlRecord>,
}

impl SitemapDocument {
    /// Returns true if the document references other sitemaps
    pub fn is_index(&self) -> bool {
        !self.sitemaps.is_empty()
    }
}

/// Parses a sitemap or sitemap index document
///
/// # Arguments
///
/// * `xml` - The raw document text
///
/// # Returns
///
/// * `Ok(SitemapDocument)` - The extracted entries
/// * `Err(ParseError)` - The document is not well-formed XML
///
/// # Example
///
/// ```
/// use sitemap_sorter::sitemap::parse_document;
///
/// let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
///   <url><loc>https://example.com/</loc><lastmod>2024-01-01</lastmod></url>
/// </urlset>"#;
/// let document = parse_document(xml).unwrap();
/// assert_eq!(document.urls.len(), 1);
/// assert_eq!(document.urls[0].lastmod.as_deref(), Some("2024-01-01"));
/// ```
pub fn parse_document(xml: &str) -> Result<SitemapDocument, ParseError> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut extractor = Extractor::default();

    loop {
        let (namespace, event) = match reader.read_resolved_event() {
            Ok((resolved, event)) => (resolve_namespace(resolved), event),
            Err(source) => {
                return Err(ParseError::Xml {
                    position: reader.error_position() as u64,
                    source,
                })
            }
        };
        let position = reader.buffer_position() as u64;

        match event {
            Event::Start(e) => {
                check_attributes(&e, position)?;
                extractor.open(bound_namespace(namespace, &e)?, &e)?;
            }
            Event::Empty(e) => {
                check_attributes(&e, position)?;
                extractor.open(bound_namespace(namespace, &e)?, &e)?;
                extractor.close()?;
            }
            Event::End(_) => extractor.close()?,
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|source| ParseError::Xml { position, source })?;
                extractor.text(&text)?;
            }
            Event::CData(e) => {
                extractor.text(String::from_utf8_lossy(&e).trim())?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    extractor.finish()
}

/// Role of an open element in the sitemap vocabulary
#[derive(Debug, Clone, Copy)]
enum FrameKind {
    /// `<url>`, with its slot in `Extractor::urls`
    Url(usize),
    /// `<sitemap>`, with its slot in `Extractor::sitemaps`
    Sitemap(usize),
    Loc,
    Lastmod,
    Other,
}

/// An element that has been opened but not yet closed
#[derive(Debug)]
struct Frame {
    name: String,
    kind: FrameKind,

    /// Text content, collected for `<loc>` and `<lastmod>` only
    text: String,

    /// First direct `<loc>` child's text (possibly empty)
    loc: Option<String>,

    /// First direct `<lastmod>` child's text (possibly empty)
    lastmod: Option<String>,
}

/// Event-driven extraction state for one document
///
/// Entries get their slot when the element opens, so nested entries keep
/// document (start tag) order.
#[derive(Debug, Default)]
struct Extractor {
    stack: Vec<Frame>,
    root_seen: bool,
    urls: Vec<Option<UrlRecord>>,
    sitemaps: Vec<SitemapEntry>,
}

impl Extractor {
    fn open(&mut self, namespace: Option<String>, e: &BytesStart<'_>) -> Result<(), ParseError> {
        if self.stack.is_empty() {
            if self.root_seen {
                return Err(ParseError::ContentOutsideRoot);
            }
            self.root_seen = true;
        }

        let kind = if namespace.as_deref() == Some(SITEMAP_NS) {
            match e.local_name().as_ref() {
                b"url" => {
                    self.urls.push(None);
                    FrameKind::Url(self.urls.len() - 1)
                }
                b"sitemap" => {
                    self.sitemaps.push(SitemapEntry { loc: None });
                    FrameKind::Sitemap(self.sitemaps.len() - 1)
                }
                b"loc" => FrameKind::Loc,
                b"lastmod" => FrameKind::Lastmod,
                _ => FrameKind::Other,
            }
        } else {
            FrameKind::Other
        };

        self.stack.push(Frame {
            name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
            kind,
            text: String::new(),
            loc: None,
            lastmod: None,
        });
        Ok(())
    }

    fn close(&mut self) -> Result<(), ParseError> {
        let frame = self.stack.pop().ok_or(ParseError::ContentOutsideRoot)?;

        match frame.kind {
            FrameKind::Loc | FrameKind::Lastmod => {
                let Some(parent) = self.stack.last_mut() else {
                    return Ok(());
                };
                if !matches!(parent.kind, FrameKind::Url(_) | FrameKind::Sitemap(_)) {
                    return Ok(());
                }
                let slot = match frame.kind {
                    FrameKind::Loc => &mut parent.loc,
                    _ => &mut parent.lastmod,
                };
                if slot.is_none() {
                    *slot = Some(frame.text);
                }
            }
            FrameKind::Url(index) => {
                if let Some(loc) = non_empty(frame.loc) {
                    self.urls[index] = Some(UrlRecord::new(loc, non_empty(frame.lastmod)));
                }
            }
            FrameKind::Sitemap(index) => {
                self.sitemaps[index].loc = non_empty(frame.loc);
            }
            FrameKind::Other => {}
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), ParseError> {
        if text.is_empty() {
            return Ok(());
        }
        let frame = self.stack.last_mut().ok_or(ParseError::ContentOutsideRoot)?;
        if matches!(frame.kind, FrameKind::Loc | FrameKind::Lastmod) {
            frame.text.push_str(text);
        }
        Ok(())
    }

    fn finish(self) -> Result<SitemapDocument, ParseError> {
        if let Some(open) = self.stack.last() {
            return Err(ParseError::UnclosedElement(open.name.clone()));
        }
        if !self.root_seen {
            return Err(ParseError::MissingRoot);
        }

        Ok(SitemapDocument {
            sitemaps: self.sitemaps,
            urls: self.urls.into_iter().flatten().collect(),
        })
    }
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty())
}

/// Rejects malformed attributes (missing `=`, unquoted or duplicated)
fn check_attributes(e: &BytesStart<'_>, position: u64) -> Result<(), ParseError> {
    for attribute in e.attributes() {
        attribute.map_err(|source| ParseError::Attribute { position, source })?;
    }
    Ok(())
}

/// Converts a resolution result into an owned namespace URI
///
/// `Unknown` carries the undeclared prefix so the caller can reject it.
fn resolve_namespace(resolved: ResolveResult<'_>) -> Result<Option<String>, Vec<u8>> {
    match resolved {
        ResolveResult::Bound(Namespace(ns)) => Ok(Some(String::from_utf8_lossy(ns).into_owned())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(prefix),
    }
}

fn bound_namespace(
    namespace: Result<Option<String>, Vec<u8>>,
    e: &BytesStart<'_>,
) -> Result<Option<String>, ParseError> {
    namespace.map_err(|_| {
        ParseError::UnboundPrefix(String::from_utf8_lossy(e.name().as_ref()).into_owned())
    })
}
