//! Configuration options for link discovery and field extraction.
//!
//! The `Options` struct carries the site-specific constants the extraction
//! rules key on, so the same rules can be pointed at a mirror or another
//! wiki without modification.

/// Default site origin that list-page references are resolved against.
pub const DEFAULT_ORIGIN: &str = "https://en.wikipedia.org";

/// Configuration options for discovery and extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the English Wikipedia settings.
///
/// # Example
///
/// ```rust
/// use upcoming_films::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Point discovery at a mirror
/// let options = Options {
///     origin: "https://wiki.example.org".to_string(),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Origin prefixed to origin-relative references found on list pages.
    ///
    /// Default: `https://en.wikipedia.org`
    pub origin: String,

    /// Header text that marks a weekly listing table on a list page.
    ///
    /// Matched as a case-sensitive substring of the header cell's text.
    ///
    /// Default: `"Opening"`
    pub listing_marker: String,

    /// Prefix identifying a canonical external catalog link.
    ///
    /// Only selects which link becomes `external_link`. The identifier is
    /// always parsed with [`crate::catalog_id`], so a non-IMDb prefix yields
    /// a link without an `external_id`.
    ///
    /// Default: `https://www.imdb.com/title/tt`
    pub catalog_prefix: String,

    /// Prefix identifying a poster image source (protocol-relative).
    ///
    /// Default: `//upload.wikimedia.org/wikipedia/en/`
    pub poster_prefix: String,

    /// Scheme prepended to protocol-relative poster sources.
    ///
    /// Default: `https:`
    pub poster_scheme: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            listing_marker: "Opening".to_string(),
            catalog_prefix: "https://www.imdb.com/title/tt".to_string(),
            poster_prefix: "//upload.wikimedia.org/wikipedia/en/".to_string(),
            poster_scheme: "https:".to_string(),
        }
    }
}
