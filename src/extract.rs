//! Record extraction from film pages.
//!
//! The page must contain an infobox-shaped fact region; every field is then
//! computed independently and degrades to absent on missing markup.

use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns;
use crate::result::Record;
use crate::selector::{self, infobox};
use crate::Options;

/// Canonical external catalog reference found on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalReference {
    /// The full reference URL, unchanged.
    pub link: String,
    /// Identifier parsed from `link`; absent when the URL is not canonical.
    pub id: Option<String>,
}

/// Extract a record from a film page.
///
/// Returns `None` when the page has no fact region.
#[must_use]
pub fn extract_record(doc: &Document, options: &Options) -> Option<Record> {
    let root = doc.select("html");
    let region = selector::query(&root, infobox::is_fact_region)?;

    let reference = external_reference(&root, &options.catalog_prefix);

    Some(Record {
        title: selector::first_match(&region, infobox::TITLE),
        external_id: reference.as_ref().and_then(|r| r.id.clone()),
        directed_by: infobox::names_for(&region, infobox::DIRECTED_BY_LABEL, &["a"]),
        starring_cast: infobox::names_for(&region, infobox::STARRING_LABEL, &["a", "li"]),
        release_date: selector::first_match(&region, infobox::RELEASE_DATE),
        poster_url: poster_url(&region, options),
        external_link: reference.map(|r| r.link),
    })
}

/// First link anywhere under `root` whose `href` starts with `prefix`.
#[must_use]
pub fn external_reference(root: &Selection, prefix: &str) -> Option<ExternalReference> {
    let link = selector::query(root, |sel| {
        selector::utils::is_tag(sel, "a")
            && dom::get_attribute(sel, "href").is_some_and(|h| h.starts_with(prefix))
    })
    .and_then(|a| dom::get_attribute(&a, "href"))?;

    let id = patterns::catalog_id(&link);
    Some(ExternalReference { link, id })
}

/// Absolute poster URL built from the protocol-relative image source.
fn poster_url(region: &Selection, options: &Options) -> Option<String> {
    infobox::poster_source(region, &options.poster_prefix)
        .map(|src| format!("{}{}", options.poster_scheme, src))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fact_region_returns_none() {
        let doc = dom::parse("<html><body><p>Just prose.</p></body></html>");
        assert!(extract_record(&doc, &Options::default()).is_none());
    }

    #[test]
    fn test_external_reference_outside_region() {
        let doc = dom::parse(
            r#"<html><body>
                <table class="infobox"><tr><th class="summary">Dune</th></tr></table>
                <ul><li><a href="https://www.imdb.com/title/tt1160419/">Dune</a> at IMDb</li></ul>
            </body></html>"#,
        );

        let record = extract_record(&doc, &Options::default()).unwrap_or_default();
        assert_eq!(record.external_id.as_deref(), Some("tt1160419"));
        assert_eq!(
            record.external_link.as_deref(),
            Some("https://www.imdb.com/title/tt1160419/")
        );
    }

    #[test]
    fn test_non_canonical_reference_keeps_link_only() {
        let doc = dom::parse(
            r#"<html><body>
                <table class="infobox"><tr><th class="summary">Dune</th></tr></table>
                <a href="https://www.imdb.com/title/tt1160419/fullcredits?ref_=x">credits</a>
            </body></html>"#,
        );

        let record = extract_record(&doc, &Options::default()).unwrap_or_default();
        assert!(record.external_id.is_none());
        assert_eq!(
            record.external_link.as_deref(),
            Some("https://www.imdb.com/title/tt1160419/fullcredits?ref_=x")
        );
    }

    #[test]
    fn test_poster_url_gets_scheme() {
        let doc = dom::parse(
            r#"<table class="infobox"><tr><td><img src="//upload.wikimedia.org/wikipedia/en/x.jpg"></td></tr></table>"#,
        );

        let record = extract_record(&doc, &Options::default()).unwrap_or_default();
        assert_eq!(
            record.poster_url.as_deref(),
            Some("https://upload.wikimedia.org/wikipedia/en/x.jpg")
        );
    }

    #[test]
    fn test_empty_region_gives_all_absent() {
        let doc = dom::parse(r#"<div class="infobox"></div>"#);

        let record = extract_record(&doc, &Options::default());
        assert_eq!(record, Some(Record::default()));
    }
}
