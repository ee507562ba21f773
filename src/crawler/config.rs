//! Crawl configuration.
//!
//! Start pages, the domains a crawl may visit, and the pause between fetches.

use std::time::Duration;

use url::Url;

use crate::options::Options;
use crate::Result;

/// Default list pages: the three "<year> in film" pages.
pub const DEFAULT_START_URLS: [&str; 3] = [
    "https://en.wikipedia.org/wiki/2019_in_film",
    "https://en.wikipedia.org/wiki/2020_in_film",
    "https://en.wikipedia.org/wiki/2021_in_film",
];

/// Default pause between consecutive fetches.
pub const DEFAULT_DOWNLOAD_DELAY: Duration = Duration::from_secs(2);

/// Configuration for a crawl run.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use upcoming_films::crawler::CrawlConfig;
///
/// let config = CrawlConfig {
///     download_delay: Duration::ZERO,
///     ..CrawlConfig::default()
/// }
/// .with_start_urls_csv("https://en.wikipedia.org/wiki/2022_in_film");
///
/// assert_eq!(config.start_urls.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// List pages the crawl starts from.
    ///
    /// Default: the 2019, 2020 and 2021 "in film" pages
    pub start_urls: Vec<String>,

    /// Hosts the crawl may fetch from. Anything else is dropped unfetched.
    ///
    /// Default: `["en.wikipedia.org"]`
    pub allowed_domains: Vec<String>,

    /// Pause between consecutive fetches.
    ///
    /// Default: 2 seconds
    pub download_delay: Duration,

    /// Discovery and extraction options.
    pub options: Options,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            start_urls: DEFAULT_START_URLS.iter().map(ToString::to_string).collect(),
            allowed_domains: vec!["en.wikipedia.org".to_string()],
            download_delay: DEFAULT_DOWNLOAD_DELAY,
            options: Options::default(),
        }
    }
}

impl CrawlConfig {
    /// Replace the start pages with a comma-separated list.
    ///
    /// Blank entries are ignored; an entirely blank list keeps the current
    /// start pages.
    #[must_use]
    pub fn with_start_urls_csv(mut self, csv: &str) -> Self {
        let urls: Vec<String> = csv
            .split(',')
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(ToString::to_string)
            .collect();

        if !urls.is_empty() {
            self.start_urls = urls;
        }
        self
    }

    /// Set the pause between fetches.
    #[must_use]
    pub fn with_download_delay(mut self, delay: Duration) -> Self {
        self.download_delay = delay;
        self
    }

    /// Parse the configured start pages.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidUrl`] for the first start URL that does
    /// not parse.
    pub fn start_targets(&self) -> Result<Vec<Url>> {
        self.start_urls
            .iter()
            .map(|u| Url::parse(u).map_err(Into::into))
            .collect()
    }

    /// Whether `url`'s host is one of the allowed domains (or a subdomain).
    #[must_use]
    pub fn is_allowed(&self, url: &Url) -> bool {
        let Some(host) = url.host_str() else {
            return false;
        };
        self.allowed_domains
            .iter()
            .any(|d| host == d || host.ends_with(&format!(".{d}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        match Url::parse(s) {
            Ok(u) => u,
            Err(err) => panic!("bad test URL {s}: {err}"),
        }
    }

    #[test]
    fn test_default_config() {
        let config = CrawlConfig::default();

        assert_eq!(config.start_urls.len(), 3);
        assert_eq!(config.start_urls[0], "https://en.wikipedia.org/wiki/2019_in_film");
        assert_eq!(config.allowed_domains, vec!["en.wikipedia.org"]);
        assert_eq!(config.download_delay, Duration::from_secs(2));
        assert_eq!(config.options, Options::default());
    }

    #[test]
    fn test_start_urls_csv_override() {
        let config = CrawlConfig::default()
            .with_start_urls_csv(" https://en.wikipedia.org/wiki/2022_in_film, ,https://en.wikipedia.org/wiki/2023_in_film ");

        assert_eq!(
            config.start_urls,
            vec![
                "https://en.wikipedia.org/wiki/2022_in_film",
                "https://en.wikipedia.org/wiki/2023_in_film",
            ]
        );
    }

    #[test]
    fn test_blank_csv_keeps_defaults() {
        let config = CrawlConfig::default().with_start_urls_csv(" , ");
        assert_eq!(config.start_urls.len(), 3);
    }

    #[test]
    fn test_start_targets_reports_bad_url() {
        let config = CrawlConfig::default().with_start_urls_csv("not a url");
        assert!(matches!(config.start_targets(), Err(crate::Error::InvalidUrl(_))));
    }

    #[test]
    fn test_is_allowed() {
        let config = CrawlConfig::default();

        assert!(config.is_allowed(&url("https://en.wikipedia.org/wiki/Dune")));
        assert!(!config.is_allowed(&url("https://www.imdb.com/title/tt1160419/")));
        assert!(!config.is_allowed(&url("https://evil-en.wikipedia.org.example.com/")));
    }
}
