//! Listing Selectors
//!
//! Rules for the weekly release tables on "<year> in film" list pages.
//!
//! A listing table is anchored by a header cell whose text contains a marker
//! word ("Opening"). Each row of that table holds the film title as an italic
//! link in its first unstyled cell; styled cells carry dates and annotations.

use dom_query::Selection;

use crate::dom;
use crate::selector::utils::{attr, contains, is_tag};

/// Header cell whose first own text segment contains `marker`.
#[must_use]
pub fn is_listing_header(sel: &Selection, marker: &str) -> bool {
    is_tag(sel, "th") && dom::first_own_text(sel).is_some_and(|text| contains(&text, marker))
}

/// First `td` child of a row that carries no inline `style` attribute.
#[must_use]
pub fn title_cell<'a>(row: &Selection<'a>) -> Option<Selection<'a>> {
    dom::child_elements(row, "td")
        .into_iter()
        .find(|td| !dom::has_attribute(td, "style"))
}

/// `href` of every `a` directly inside an `i` directly inside the cell.
#[must_use]
pub fn italic_link_hrefs(cell: &Selection) -> Vec<String> {
    dom::child_elements(cell, "i")
        .iter()
        .flat_map(|i| dom::child_elements(i, "a"))
        .filter(|a| dom::has_attribute(a, "href"))
        .map(|a| attr(&a, "href"))
        .collect()
}
