//! Compiled regex patterns for identifier parsing.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Canonical catalog title URL: `https://www.imdb.com/title/tt<digits>/`.
///
/// The trailing slash is optional. Anything else (extra path segments,
/// query strings, fragments) does not match.
pub static CATALOG_TITLE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://www\.imdb\.com/title/(tt\d+)/?$").expect("CATALOG_TITLE_URL regex")
});

/// Parse the catalog identifier out of a canonical title URL.
///
/// Returns `None` for any URL that deviates from the canonical shape.
#[must_use]
pub fn catalog_id(url: &str) -> Option<String> {
    CATALOG_TITLE_URL
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
