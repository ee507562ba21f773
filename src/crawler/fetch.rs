//! Page fetching seam.
//!
//! The crawl controller never talks to the network directly; it asks a
//! [`Fetcher`] for the markup of a URL. Tests plug in an in-memory map, the
//! `crawl_upcoming` binary uses [`HttpFetcher`] (feature `http`).

use std::collections::HashMap;

use url::Url;

use crate::{Error, Result};

/// Retrieves the markup of a page.
pub trait Fetcher {
    /// Fetch `url` and return its body as text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] or [`Error::Status`] when the page cannot be
    /// retrieved.
    fn fetch(&self, url: &Url) -> Result<String>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &Url) -> Result<String> {
        (**self).fetch(url)
    }
}

/// Fetcher serving pages from memory, keyed by absolute URL.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
}

impl StaticFetcher {
    /// Create an empty fetcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `html` as the body of `url`.
    #[must_use]
    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        self.pages.get(url.as_str()).cloned().ok_or_else(|| Error::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}

/// Blocking HTTP fetcher.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpFetcher {
    /// Build a fetcher identifying itself with `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] if the HTTP client cannot be constructed.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Fetch {
                url: String::new(),
                message: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

#[cfg(feature = "http")]
impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        let fetch_error = |e: reqwest::Error| Error::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url.clone()).send().map_err(fetch_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(fetch_error)
    }
}
