//! Backend search parameters and the merge of AI and URL supplied filters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Filter parameters understood by `GET /search/`. `q` is kept separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SearchParamKey {
    Category,
    AgeGroup,
    Format,
    City,
    Level,
    IsVerified,
    MaxRate,
    FirstSessionFree,
}

impl SearchParamKey {
    pub const ALL: [SearchParamKey; 8] = [
        SearchParamKey::Category,
        SearchParamKey::AgeGroup,
        SearchParamKey::Format,
        SearchParamKey::City,
        SearchParamKey::Level,
        SearchParamKey::IsVerified,
        SearchParamKey::MaxRate,
        SearchParamKey::FirstSessionFree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchParamKey::Category => "category",
            SearchParamKey::AgeGroup => "ageGroup",
            SearchParamKey::Format => "format",
            SearchParamKey::City => "city",
            SearchParamKey::Level => "level",
            SearchParamKey::IsVerified => "isVerified",
            SearchParamKey::MaxRate => "maxRate",
            SearchParamKey::FirstSessionFree => "firstSessionFree",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }

    /// Turns a URL supplied string into a typed value, `None` if it does not fit the key.
    pub fn parse_value(&self, raw: &str) -> Option<ParamValue> {
        let raw = raw.trim();
        if is_blank_value(raw) {
            return None;
        }
        match self {
            SearchParamKey::IsVerified | SearchParamKey::FirstSessionFree => match raw {
                "true" => Some(ParamValue::Bool(true)),
                "false" => Some(ParamValue::Bool(false)),
                _ => None,
            },
            SearchParamKey::MaxRate => raw.parse::<u32>().ok().filter(|rate| *rate > 0).map(ParamValue::Int),
            _ => Some(ParamValue::Text(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamValue {
    Text(String),
    Int(u32),
    Bool(bool),
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Values the AI and old links use to mean "not set".
pub fn is_blank_value(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == "null" || value == "undefined"
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BackendSearchParams {
    pub q: String,
    pub filters: BTreeMap<SearchParamKey, ParamValue>,
}

impl BackendSearchParams {
    pub fn from_query(q: impl Into<String>) -> Self {
        Self { q: q.into(), filters: BTreeMap::new() }
    }

    /// Query string pairs, `q` first, filters in key order.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("q", self.q.clone())];
        pairs.extend(self.filters.iter().map(|(key, value)| (key.as_str(), value.to_string())));
        pairs
    }

    pub fn get(&self, key: SearchParamKey) -> Option<&ParamValue> {
        self.filters.get(&key)
    }
}

/// Applies URL filters on top of `params`. URL values replace AI values for the same key.
///
/// Unknown keys, `q`, and blank or ill-typed values are ignored.
pub fn merge_url_filters(params: &mut BackendSearchParams, url_filters: &BTreeMap<String, String>) {
    for (name, raw_value) in url_filters {
        let Some(key) = SearchParamKey::from_name(name) else {
            debug!("ignoring unrecognised url filter {name:?}");
            continue;
        };
        match key.parse_value(raw_value) {
            Some(value) => {
                params.filters.insert(key, value);
            }
            None => debug!("ignoring url filter {name:?} with unusable value {raw_value:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn url_filter_overrides_ai_value() {
        let mut params = BackendSearchParams::from_query("guitar");
        params.filters.insert(SearchParamKey::Category, ParamValue::Text("music".to_string()));
        let url_filters = BTreeMap::from([("category".to_string(), "dance".to_string())]);

        merge_url_filters(&mut params, &url_filters);

        assert_eq!(params.get(SearchParamKey::Category), Some(&ParamValue::Text("dance".to_string())));
    }

    #[test]
    fn blank_and_unknown_url_filters_are_dropped() {
        let mut params = BackendSearchParams::from_query("yoga");
        params.filters.insert(SearchParamKey::City, ParamValue::Text("Pune".to_string()));
        let url_filters = BTreeMap::from([
            ("city".to_string(), "undefined".to_string()),
            ("level".to_string(), "".to_string()),
            ("q".to_string(), "ignored".to_string()),
            ("sort".to_string(), "price".to_string()),
            ("maxRate".to_string(), "0".to_string()),
        ]);

        merge_url_filters(&mut params, &url_filters);

        assert_eq!(params.q, "yoga");
        assert_eq!(params.filters, BTreeMap::from([(SearchParamKey::City, ParamValue::Text("Pune".to_string()))]));
    }

    #[test]
    fn url_filters_are_typed() {
        let mut params = BackendSearchParams::from_query("tabla");
        let url_filters = BTreeMap::from([
            ("isVerified".to_string(), "true".to_string()),
            ("maxRate".to_string(), "40".to_string()),
            ("firstSessionFree".to_string(), "yes".to_string()),
        ]);

        merge_url_filters(&mut params, &url_filters);

        assert_eq!(params.get(SearchParamKey::IsVerified), Some(&ParamValue::Bool(true)));
        assert_eq!(params.get(SearchParamKey::MaxRate), Some(&ParamValue::Int(40)));
        assert_eq!(params.get(SearchParamKey::FirstSessionFree), None);
    }

    #[test]
    fn query_pairs_start_with_q() {
        let mut params = BackendSearchParams::from_query("guitar");
        params.filters.insert(SearchParamKey::FirstSessionFree, ParamValue::Bool(true));
        params.filters.insert(SearchParamKey::MaxRate, ParamValue::Int(25));

        assert_eq!(
            params.to_query_pairs(),
            vec![
                ("q", "guitar".to_string()),
                ("maxRate", "25".to_string()),
                ("firstSessionFree", "true".to_string()),
            ]
        );
    }
}
