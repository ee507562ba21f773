//! Error types for upcoming-films.
//!
//! Extraction itself never fails: missing markup resolves to absent fields.
//! These errors belong to the crawl layer (URL handling and fetching).

/// Error type for crawl operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configured or discovered URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The fetcher could not retrieve a page.
    #[error("Fetch failed for {url}: {message}")]
    Fetch {
        /// URL that was being fetched.
        url: String,
        /// Transport-level failure description.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("Unexpected HTTP status {status} for {url}")]
    Status {
        /// URL that was being fetched.
        url: String,
        /// HTTP status code.
        status: u16,
    },
}

/// Result type alias for crawl operations.
pub type Result<T> = std::result::Result<T, Error>;
