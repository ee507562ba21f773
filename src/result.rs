//! Result types produced by discovery and extraction.
//!
//! `Record` is the unit produced per film page, `LinkTarget` the unit
//! produced per qualifying list-page row.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Structured data extracted from one film page's infobox.
///
/// Field declaration order is the export order downstream consumers rely on.
/// Absent values serialize as `null` so every record has the same keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Film title from the infobox summary header.
    pub title: Option<String>,

    /// Catalog identifier parsed out of `external_link` (e.g. `tt1234567`).
    pub external_id: Option<String>,

    /// Director names, in document order.
    pub directed_by: Vec<String>,

    /// Cast names, in document order.
    pub starring_cast: Vec<String>,

    /// Release date as written in the page; not normalized.
    pub release_date: Option<String>,

    /// Absolute URL of the poster image.
    pub poster_url: Option<String>,

    /// Raw canonical catalog URL.
    pub external_link: Option<String>,
}

impl Record {
    /// Export field names in their persisted order.
    pub const FIELDS: [&'static str; 7] = [
        "title",
        "external_id",
        "directed_by",
        "starring_cast",
        "release_date",
        "poster_url",
        "external_link",
    ];
}

/// Absolute URL of a film page discovered on a list page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkTarget(Url);

impl LinkTarget {
    /// Wrap an already-resolved URL.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self(url)
    }

    /// Borrow the underlying URL.
    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Take ownership of the underlying URL.
    #[must_use]
    pub fn into_url(self) -> Url {
        self.0
    }

    /// The URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<LinkTarget> for Url {
    fn from(target: LinkTarget) -> Self {
        target.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_in_export_order_with_nulls() {
        let record = Record {
            title: Some("Black Widow".to_string()),
            directed_by: vec!["Cate Shortland".to_string()],
            ..Record::default()
        };

        let json = serde_json::to_string(&record).unwrap_or_default();
        assert_eq!(
            json,
            r#"{"title":"Black Widow","external_id":null,"directed_by":["Cate Shortland"],"starring_cast":[],"release_date":null,"poster_url":null,"external_link":null}"#
        );
    }

    #[test]
    fn test_fields_match_serialized_keys() {
        let value = serde_json::to_value(Record::default()).unwrap_or_default();
        let keys: Vec<&str> = value
            .as_object()
            .map(|obj| obj.keys().map(String::as_str).collect())
            .unwrap_or_default();

        // serde_json's default map is sorted, so compare as sets
        let mut expected = Record::FIELDS.to_vec();
        expected.sort_unstable();
        let mut keys = keys;
        keys.sort_unstable();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_link_target_display() {
        let url = Url::parse("https://en.wikipedia.org/wiki/Dune_(2021_film)");
        let Ok(url) = url else {
            panic!("valid test URL");
        };
        let target = LinkTarget::new(url.clone());

        assert_eq!(target.to_string(), "https://en.wikipedia.org/wiki/Dune_(2021_film)");
        assert_eq!(target.as_url(), &url);
        assert_eq!(Url::from(target), url);
    }
}
