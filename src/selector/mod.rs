//! Selector Infrastructure
//!
//! Provides the foundation for the rules used by link discovery and field
//! extraction. Predicate rules test whether a Selection matches; field rules
//! try to produce a value and are grouped into ordered candidate lists that
//! are evaluated first-match-wins.

use dom_query::Selection;

pub mod infobox;
pub mod listing;
pub mod utils;

/// A selector rule that tests if a selection matches certain criteria
pub type Rule = fn(&Selection) -> bool;

/// A field rule that tries to produce a value from a scope element
///
/// Field rules for the same field are kept in priority order; the first one
/// returning `Some` decides the field.
pub type FieldRule = fn(&Selection) -> Option<String>;

/// Query for first element matching the rule
///
/// Iterates through all descendants in document order and returns the first
/// element for which the rule returns true.
///
/// # Example
///
/// ```rust
/// use upcoming_films::selector::{self, utils};
/// use upcoming_films::dom;
///
/// let doc = dom::parse(r#"<div><p class="content">text</p></div>"#);
/// let root = doc.select("div");
///
/// let result = selector::query(&root, |sel| utils::class(sel).contains("content"));
/// assert!(result.is_some());
/// ```
#[must_use]
pub fn query<'a, F>(root: &Selection<'a>, rule: F) -> Option<Selection<'a>>
where
    F: Fn(&Selection) -> bool,
{
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .find(|sel| rule(sel))
}

/// Query for all elements matching the rule
///
/// Iterates through all descendants in document order and collects all
/// elements for which the rule returns true.
///
/// # Example
///
/// ```rust
/// use upcoming_films::selector::{self, utils};
/// use upcoming_films::dom;
///
/// let doc = dom::parse(r#"<div><p class="item">1</p><p class="item">2</p></div>"#);
/// let root = doc.select("div");
///
/// let results = selector::query_all(&root, |sel| utils::class(sel).contains("item"));
/// assert_eq!(results.len(), 2);
/// ```
#[must_use]
pub fn query_all<'a, F>(root: &Selection<'a>, rule: F) -> Vec<Selection<'a>>
where
    F: Fn(&Selection) -> bool,
{
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| rule(sel))
        .collect()
}

/// Evaluate field rules in order and return the first produced value
#[must_use]
pub fn first_match(scope: &Selection, rules: &[FieldRule]) -> Option<String> {
    rules.iter().find_map(|rule| rule(scope))
}
