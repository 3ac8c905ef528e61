//! Shared search query models and helpers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::search_params::is_blank_value;


/// Search state carried in the search page URL.
///
/// `url_filters` are keyed by backend parameter names (`category`, `city`,
/// `maxRate`, ...) and always win over filters suggested by the AI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MarketplaceQuery {
    pub query_string: String,
    pub url_filters: BTreeMap<String, String>,
}

impl MarketplaceQuery {
    pub fn from_query_string(query_string: impl Into<String>) -> Self {
        Self { query_string: query_string.into(), url_filters: BTreeMap::new() }
    }

    /// An empty query string means "no search".
    pub fn is_empty(&self) -> bool {
        self.query_string.trim().is_empty()
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_filter(key, value);
        self
    }

    /// Sets a URL filter, or removes it when `value` is blank.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if is_blank_value(&value) {
            self.url_filters.remove(&key);
        } else {
            self.url_filters.insert(key, value);
        }
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.url_filters.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filter_clears_the_key() {
        let mut query = MarketplaceQuery::from_query_string("sitar").with_filter("city", "Varanasi");
        assert_eq!(query.filter("city"), Some("Varanasi"));

        query.set_filter("city", "");
        assert_eq!(query.filter("city"), None);
        assert!(query.url_filters.is_empty());
    }

    #[test]
    fn whitespace_query_is_no_search() {
        assert!(MarketplaceQuery::from_query_string("   ").is_empty());
        assert!(!MarketplaceQuery::from_query_string("oud").is_empty());
    }
}
