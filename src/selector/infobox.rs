//! Infobox Selectors
//!
//! Rules for the structured fact region ("infobox") of a film page.
//!
//! Label/value layout: a `th` names a fact ("Directed by") and the next `td`
//! in document order holds its value. Values come in several shapes (a single
//! link, several links separated by `<br>`, a plain bullet list) and carry
//! citation markers (`<sup class="reference">`) that must not leak into names.

use dom_query::Selection;

use crate::dom;
use crate::selector::utils::{class, contains, is_tag, non_blank};
use crate::selector::{self, FieldRule};

/// Class of the element wrapping citation markers.
pub const REFERENCE_CLASS: &str = "reference";

/// Text that marks the US entry in a release-date list.
pub const US_RELEASE_MARKER: &str = " (United States)";

/// Label of the director fact.
pub const DIRECTED_BY_LABEL: &str = "Directed by";

/// Label of the cast fact.
pub const STARRING_LABEL: &str = "Starring";

// ============================================================
// FACT REGION
// ============================================================

/// Element whose class attribute contains "infobox".
#[must_use]
pub fn is_fact_region(sel: &Selection) -> bool {
    contains(&class(sel), "infobox")
}

// ============================================================
// TITLE
// ============================================================

/// Title rules (in priority order)
pub static TITLE: &[FieldRule] = &[summary_header_text];

/// Header cell with class token `summary`.
#[must_use]
pub fn is_summary_header(sel: &Selection) -> bool {
    is_tag(sel, "th") && dom::has_class_token(sel, "summary")
}

/// First non-blank text of the summary header, either directly in the cell
/// or inside an italic child, whichever comes first.
#[must_use]
pub fn summary_header_text(region: &Selection) -> Option<String> {
    let header = selector::query(region, is_summary_header)?;
    let node = header.nodes().first()?;

    node.children().into_iter().find_map(|child| {
        if child.is_text() {
            non_blank(&child.text())
        } else if dom::node_is_tag(&child, "i") {
            dom::own_text_segments(&Selection::from(child))
                .iter()
                .find_map(|t| non_blank(t))
        } else {
            None
        }
    })
}

// ============================================================
// POSTER
// ============================================================

/// `src` of the first image whose source starts with `prefix`.
#[must_use]
pub fn poster_source(region: &Selection, prefix: &str) -> Option<String> {
    selector::query(region, |sel| {
        is_tag(sel, "img") && dom::get_attribute(sel, "src").is_some_and(|s| s.starts_with(prefix))
    })
    .and_then(|img| dom::get_attribute(&img, "src"))
}

// ============================================================
// LABELLED FACTS
// ============================================================

/// Label cell whose own text is exactly `label`.
#[must_use]
pub fn label_cell<'a>(region: &Selection<'a>, label: &str) -> Option<Selection<'a>> {
    selector::query(region, |sel| {
        is_tag(sel, "th") && dom::first_own_text(sel).is_some_and(|t| t.trim() == label)
    })
}

/// Value cell paired with `label`: the first `td` after the label cell.
#[must_use]
pub fn value_cell<'a>(region: &Selection<'a>, label: &str) -> Option<Selection<'a>> {
    let label = label_cell(region, label)?;
    dom::following_element(region, &label, "td")
}

/// Text nodes directly inside any of `parent_tags` within `cell`, in document
/// order, skipping everything nested under a citation marker.
#[must_use]
pub fn collect_names(cell: &Selection, parent_tags: &[&str]) -> Vec<String> {
    let Some(root) = cell.nodes().first() else {
        return Vec::new();
    };

    root.descendants()
        .into_iter()
        .filter(|node| node.is_text())
        .filter(|node| {
            node.parent()
                .is_some_and(|p| parent_tags.iter().any(|tag| dom::node_is_tag(&p, tag)))
        })
        .filter(|node| !dom::has_ancestor_with_class(node, REFERENCE_CLASS))
        .filter_map(|node| non_blank(&node.text()))
        .collect()
}

/// Names listed for `label`; empty when the label or its names are absent.
#[must_use]
pub fn names_for(region: &Selection, label: &str, parent_tags: &[&str]) -> Vec<String> {
    value_cell(region, label)
        .map(|cell| collect_names(&cell, parent_tags))
        .unwrap_or_default()
}

// ============================================================
// RELEASE DATE
// ============================================================

/// Release date rules (in priority order)
pub static RELEASE_DATE: &[FieldRule] = &[us_release_date, machine_readable_date];

/// Rule 1: the US entry of a release list.
///
/// Matches a `li` whose second own text segment contains " (United States)"
/// and reads the inner span of its `span > span` (the machine-readable date
/// nested inside the human-readable one).
#[must_use]
pub fn us_release_date(region: &Selection) -> Option<String> {
    selector::query_all(region, |sel| is_tag(sel, "li"))
        .iter()
        .filter(|li| {
            dom::own_text_segments(li)
                .get(1)
                .is_some_and(|t| contains(t, US_RELEASE_MARKER))
        })
        .flat_map(|li| dom::child_elements(li, "span"))
        .flat_map(|span| dom::child_elements(&span, "span"))
        .find_map(|inner| non_blank(&dom::text_content(&inner)))
}

/// Rule 2: first element carrying the machine-readable date class.
#[must_use]
pub fn machine_readable_date(region: &Selection) -> Option<String> {
    selector::query(region, |sel| contains(&class(sel), "bday"))
        .and_then(|el| non_blank(&dom::text_content(&el)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    const INFOBOX: &str = r##"
        <table class="infobox vevent">
          <tbody>
            <tr><th colspan="2" class="infobox-above summary"><i>Black Widow</i></th></tr>
            <tr><td colspan="2" class="infobox-image">
              <a href="/wiki/File:Black_Widow.png"><img src="//upload.wikimedia.org/wikipedia/en/e/e9/Black_Widow.png"></a>
            </td></tr>
            <tr><th scope="row" class="infobox-label">Directed by</th>
                <td class="infobox-data"><a href="/wiki/Cate_Shortland">Cate Shortland</a></td></tr>
            <tr><th scope="row" class="infobox-label">Starring</th>
                <td class="infobox-data"><div class="plainlist"><ul>
                  <li><a href="/wiki/Scarlett_Johansson">Scarlett Johansson</a></li>
                  <li>Florence Pugh</li>
                  <li><a href="/wiki/David_Harbour">David Harbour</a><sup class="reference"><a href="#cite_note-1">[1]</a></sup></li>
                </ul></div></td></tr>
          </tbody>
        </table>
    "##;

    #[test]
    fn test_is_fact_region() {
        let doc = dom::parse(INFOBOX);
        assert!(is_fact_region(&doc.select("table")));
        assert!(!is_fact_region(&doc.select("ul")));
    }

    #[test]
    fn test_summary_header_text_from_italic_child() {
        let doc = dom::parse(INFOBOX);
        let region = doc.select("table");

        assert_eq!(summary_header_text(&region).as_deref(), Some("Black Widow"));
    }

    #[test]
    fn test_summary_header_text_prefers_direct_text_in_document_order() {
        let doc = dom::parse(
            r#"<table class="infobox"><tr><th class="summary">Tenet <i>(film)</i></th></tr></table>"#,
        );

        assert_eq!(summary_header_text(&doc.select("table")).as_deref(), Some("Tenet"));
    }

    #[test]
    fn test_poster_source_requires_prefix() {
        let doc = dom::parse(
            r#"<table class="infobox"><tr><td>
                <img src="//upload.wikimedia.org/wikipedia/commons/flag.svg">
                <img src="//upload.wikimedia.org/wikipedia/en/poster.jpg">
            </td></tr></table>"#,
        );

        assert_eq!(
            poster_source(&doc.select("table"), "//upload.wikimedia.org/wikipedia/en/").as_deref(),
            Some("//upload.wikimedia.org/wikipedia/en/poster.jpg")
        );
    }

    #[test]
    fn test_names_for_directed_by() {
        let doc = dom::parse(INFOBOX);
        let region = doc.select("table");

        assert_eq!(names_for(&region, DIRECTED_BY_LABEL, &["a"]), vec!["Cate Shortland"]);
    }

    #[test]
    fn test_names_for_starring_mixes_links_and_list_items() {
        let doc = dom::parse(INFOBOX);
        let region = doc.select("table");

        assert_eq!(
            names_for(&region, STARRING_LABEL, &["a", "li"]),
            vec!["Scarlett Johansson", "Florence Pugh", "David Harbour"]
        );
    }

    #[test]
    fn test_names_for_missing_label_is_empty() {
        let doc = dom::parse(INFOBOX);
        assert!(names_for(&doc.select("table"), "Music by", &["a"]).is_empty());
    }

    #[test]
    fn test_label_must_match_exactly() {
        let doc = dom::parse(
            r#"<table class="infobox"><tr><th>Directed by and written by</th><td><a>X</a></td></tr></table>"#,
        );
        assert!(label_cell(&doc.select("table"), DIRECTED_BY_LABEL).is_none());
    }

    #[test]
    fn test_us_release_date_reads_nested_span() {
        let doc = dom::parse(
            r#"<table class="infobox"><tr><td><div class="plainlist"><ul>
                <li>June 29, 2021<span style="display:none">&#160;(<span class="bday dtstart published updated">2021-06-29</span>)</span> (Hungary)</li>
                <li>July 9, 2021<span style="display:none">&#160;(<span class="bday dtstart published updated">2021-07-09</span>)</span> (United States)</li>
            </ul></div></td></tr></table>"#,
        );

        assert_eq!(us_release_date(&doc.select("table")).as_deref(), Some("2021-07-09"));
    }

    #[test]
    fn test_machine_readable_date_fallback() {
        let doc = dom::parse(
            r#"<table class="infobox"><tr><td>October 22, 2021<span style="display:none"> (<span class="bday dtstart published updated">2021-10-22</span>)</span></td></tr></table>"#,
        );
        let region = doc.select("table");

        assert!(us_release_date(&region).is_none());
        assert_eq!(machine_readable_date(&region).as_deref(), Some("2021-10-22"));
        assert_eq!(selector::first_match(&region, RELEASE_DATE).as_deref(), Some("2021-10-22"));
    }
}
