//! # upcoming-films
//!
//! Discovers the "<year> in film" list pages of an encyclopedia, follows their
//! release tables to individual film pages, and extracts a normalized
//! [`Record`] from each film page's infobox.
//!
//! ## Quick Start
//!
//! ```rust
//! use upcoming_films::{dom, extract};
//!
//! let html = r#"<table class="infobox vevent">
//!   <tr><th class="infobox-above summary"><i>Dune</i></th></tr>
//!   <tr><th class="infobox-label">Directed by</th>
//!       <td class="infobox-data"><a href="/wiki/Denis_Villeneuve">Denis Villeneuve</a></td></tr>
//! </table>"#;
//!
//! let doc = dom::parse(html);
//! let record = extract(&doc).expect("page has an infobox");
//! assert_eq!(record.title.as_deref(), Some("Dune"));
//! assert_eq!(record.directed_by, vec!["Denis Villeneuve"]);
//! ```
//!
//! ## Layers
//!
//! - **Discovery**: list page → ordered [`LinkTarget`]s
//! - **Extraction**: film page → zero or one [`Record`]
//! - **Crawling**: a sequential controller that routes fetched pages to the
//!   two layers above through the [`crawler::Fetcher`] seam

mod discover;
mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Selector rules for list pages and infoboxes.
pub mod selector;

/// Crawl controller: frontier, routing, and the fetcher seam.
pub mod crawler;

// Public API - re-exports
pub use discover::resolve;
pub use error::{Error, Result};
pub use extract::{external_reference, ExternalReference};
pub use options::{Options, DEFAULT_ORIGIN};
pub use patterns::catalog_id;
pub use result::{LinkTarget, Record};

use dom_query::Document;

/// Discovers film-page links on a list page using default options.
///
/// # Example
///
/// ```rust
/// use upcoming_films::{discover, dom};
///
/// let doc = dom::parse(r#"<table><tbody>
///   <tr><th>Opening</th><th>Title</th></tr>
///   <tr><td><i><a href="/wiki/Tenet_(film)">Tenet</a></i></td></tr>
/// </tbody></table>"#);
///
/// let links = discover(&doc);
/// assert_eq!(links[0].as_str(), "https://en.wikipedia.org/wiki/Tenet_(film)");
/// ```
#[must_use]
pub fn discover(doc: &Document) -> Vec<LinkTarget> {
    discover_with_options(doc, &Options::default())
}

/// Discovers film-page links on a list page with custom options.
#[must_use]
pub fn discover_with_options(doc: &Document, options: &Options) -> Vec<LinkTarget> {
    discover::discover_links(doc, options)
}

/// Extracts a record from a film page using default options.
///
/// Returns `None` when the page has no infobox.
#[must_use]
pub fn extract(doc: &Document) -> Option<Record> {
    extract_with_options(doc, &Options::default())
}

/// Extracts a record from a film page with custom options.
#[must_use]
pub fn extract_with_options(doc: &Document, options: &Options) -> Option<Record> {
    extract::extract_record(doc, options)
}

/// Parses `html` and extracts a record from it.
///
/// # Example
///
/// ```rust
/// use upcoming_films::extract_html;
///
/// assert!(extract_html("<html><body><p>No infobox</p></body></html>").is_none());
/// ```
#[must_use]
pub fn extract_html(html: &str) -> Option<Record> {
    extract(&dom::parse(html))
}

/// Parses `html` and discovers film-page links in it.
#[must_use]
pub fn discover_html(html: &str) -> Vec<LinkTarget> {
    discover(&dom::parse(html))
}
