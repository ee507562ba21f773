//! Link discovery on list pages.
//!
//! Walks every listing table anchored by the marker header and turns each
//! row's italic title link into an absolute [`LinkTarget`].

use dom_query::{Document, NodeId};
use tracing::debug;
use url::Url;

use crate::dom;
use crate::result::LinkTarget;
use crate::selector::{self, listing};
use crate::Options;

/// Discover film-page links on a list page.
///
/// Output follows document order of rows, across tables in document order.
/// Duplicate references in distinct rows are kept. A row group anchored by
/// several marker headers is visited once.
#[must_use]
pub fn discover_links(doc: &Document, options: &Options) -> Vec<LinkTarget> {
    let root = doc.select("html");
    let marker = options.listing_marker.as_str();

    let headers = selector::query_all(&root, |sel| listing::is_listing_header(sel, marker));

    let mut seen_groups: Vec<NodeId> = Vec::new();
    let mut targets = Vec::new();

    for header in headers {
        // header cell -> header row -> row group
        let group = dom::parent(&dom::parent(&header));
        let Some(group_id) = group.nodes().first().map(|n| n.id) else {
            continue;
        };
        if seen_groups.contains(&group_id) {
            continue;
        }
        seen_groups.push(group_id);

        for row in dom::child_elements(&group, "tr") {
            let Some(cell) = listing::title_cell(&row) else {
                continue;
            };
            for href in listing::italic_link_hrefs(&cell) {
                if let Some(target) = resolve(&options.origin, &href) {
                    targets.push(target);
                }
            }
        }
    }

    debug!(count = targets.len(), "discovered film links");
    targets
}

/// Prefix an origin-relative reference with `origin`.
///
/// References that are not origin-relative (absolute or protocol-relative)
/// are rejected rather than guessed at.
#[must_use]
pub fn resolve(origin: &str, href: &str) -> Option<LinkTarget> {
    let href = href.trim();
    if !href.starts_with('/') || href.starts_with("//") {
        debug!(href, "skipping reference that is not origin-relative");
        return None;
    }

    let joined = format!("{}{}", origin.trim_end_matches('/'), href);
    match Url::parse(&joined) {
        Ok(url) => Some(LinkTarget::new(url)),
        Err(err) => {
            debug!(href, error = %err, "skipping unresolvable reference");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefixes_origin() {
        let target = resolve("https://en.wikipedia.org", "/wiki/Dune_(2021_film)");
        assert_eq!(
            target.map(|t| t.to_string()).as_deref(),
            Some("https://en.wikipedia.org/wiki/Dune_(2021_film)")
        );
    }

    #[test]
    fn test_resolve_tolerates_trailing_slash_on_origin() {
        let target = resolve("https://en.wikipedia.org/", "/wiki/Tenet_(film)");
        assert_eq!(
            target.map(|t| t.to_string()).as_deref(),
            Some("https://en.wikipedia.org/wiki/Tenet_(film)")
        );
    }

    #[test]
    fn test_resolve_rejects_non_relative() {
        assert!(resolve("https://en.wikipedia.org", "https://example.com/x").is_none());
        assert!(resolve("https://en.wikipedia.org", "//example.com/x").is_none());
        assert!(resolve("https://en.wikipedia.org", "wiki/Relative").is_none());
        assert!(resolve("not an origin", "/wiki/X").is_none());
    }
}
