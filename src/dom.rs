//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate providing the query capability the
//! extraction rules need: attribute access, own-text segments, ancestor
//! checks, and document-order (following-axis) navigation.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Check whether the class attribute contains `token` as a whitespace-separated word
#[must_use]
pub fn has_class_token(sel: &Selection, token: &str) -> bool {
    class_name(sel).is_some_and(|c| c.split_whitespace().any(|t| t == token))
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Check whether a node is an element with the given tag name
#[must_use]
pub fn node_is_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element() && node.node_name().is_some_and(|n| n.eq_ignore_ascii_case(tag))
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text nodes that are direct children of the first selected element, in order.
///
/// This is the element's "own" text: text inside child elements is not
/// included, and each run between child elements is a separate segment.
#[must_use]
pub fn own_text_segments(sel: &Selection) -> Vec<StrTendril> {
    let Some(node) = sel.nodes().first() else {
        return Vec::new();
    };

    node.children()
        .into_iter()
        .filter(NodeRef::is_text)
        .map(|child| child.text())
        .collect()
}

/// First own text segment of the first selected element, if any.
#[must_use]
pub fn first_own_text(sel: &Selection) -> Option<StrTendril> {
    own_text_segments(sel).into_iter().next()
}

// === Tree Navigation ===

/// Get parent element
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Element children of the first selected node with the given tag, in order.
#[must_use]
pub fn child_elements<'a>(sel: &Selection<'a>, tag: &str) -> Vec<Selection<'a>> {
    sel.nodes()
        .first()
        .map(|node| {
            node.children()
                .into_iter()
                .filter(|child| node_is_tag(child, tag))
                .map(Selection::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Check whether any ancestor of `node` has a class attribute exactly equal to `class`.
#[must_use]
pub fn has_ancestor_with_class(node: &NodeRef, class: &str) -> bool {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if ancestor.is_element()
            && Selection::from(ancestor)
                .attr("class")
                .is_some_and(|c| &*c == class)
        {
            return true;
        }
        current = ancestor.parent();
    }
    false
}

/// First element with tag `tag` that follows `anchor` in document order.
///
/// Mirrors the XPath `following::tag[1]` axis restricted to `scope`: the
/// anchor's own descendants are not considered to follow it.
#[must_use]
pub fn following_element<'a>(
    scope: &Selection<'a>,
    anchor: &Selection<'a>,
    tag: &str,
) -> Option<Selection<'a>> {
    let scope_node = scope.nodes().first()?;
    let anchor_node = anchor.nodes().first()?;

    let mut passed_anchor = false;
    for node in scope_node.descendants() {
        if !passed_anchor {
            passed_anchor = node.id == anchor_node.id;
            continue;
        }
        if node_is_tag(&node, tag) && !is_descendant_of(&node, anchor_node) {
            return Some(Selection::from(node));
        }
    }
    None
}

fn is_descendant_of(node: &NodeRef, ancestor: &NodeRef) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.id == ancestor.id {
            return true;
        }
        current = parent.parent();
    }
    false
}
