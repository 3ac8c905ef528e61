//! Parsing of the line-oriented `key: value` block returned by the chat endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Filter names the enhancement prompt asks the model to fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKey {
    SearchTerms,
    Category,
    AgeGroup,
    Format,
    Location,
    Level,
    MentorQualification,
    MaxPrice,
    FreeTrial,
    MatchedSubjects,
}

impl FilterKey {
    pub const ALL: [FilterKey; 10] = [
        FilterKey::SearchTerms,
        FilterKey::Category,
        FilterKey::AgeGroup,
        FilterKey::Format,
        FilterKey::Location,
        FilterKey::Level,
        FilterKey::MentorQualification,
        FilterKey::MaxPrice,
        FilterKey::FreeTrial,
        FilterKey::MatchedSubjects,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::SearchTerms => "search_terms",
            FilterKey::Category => "category",
            FilterKey::AgeGroup => "age_group",
            FilterKey::Format => "format",
            FilterKey::Location => "location",
            FilterKey::Level => "level",
            FilterKey::MentorQualification => "mentor_qualification",
            FilterKey::MaxPrice => "max_price",
            FilterKey::FreeTrial => "free_trial",
            FilterKey::MatchedSubjects => "matched_subjects",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

/// Raw AI suggestions. Values are unvalidated and may be the literal `"null"`.
pub type ParsedFilterSet = BTreeMap<FilterKey, String>;

/// Extracts recognised `key: value` lines.
///
/// A line only matches when its text up to the first colon is exactly a known
/// key, so a key name appearing inside a value is never picked up. Later lines
/// overwrite earlier ones for the same key. Anything unparseable is skipped.
pub fn parse_ai_response(text: &str) -> ParsedFilterSet {
    let mut parsed = ParsedFilterSet::new();
    for line in text.lines() {
        let Some((name, value)) = line.trim().split_once(':') else { continue };
        let Some(key) = FilterKey::from_name(name.trim()) else { continue };
        let value = value.replace(['[', ']'], "");
        parsed.insert(key, value.trim().to_string());
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_well_formed_block() {
        let parsed = parse_ai_response("search_terms: piano\ncategory: music\nmax_price: 30\nfree_trial: true");
        let expected = ParsedFilterSet::from([
            (FilterKey::SearchTerms, "piano".to_string()),
            (FilterKey::Category, "music".to_string()),
            (FilterKey::MaxPrice, "30".to_string()),
            (FilterKey::FreeTrial, "true".to_string()),
        ]);
        assert_eq!(parsed, expected);
    }

    #[test]
    fn empty_input_gives_empty_set() {
        assert!(parse_ai_response("").is_empty());
        assert!(parse_ai_response("I could not understand the request.").is_empty());
    }

    #[test]
    fn strips_brackets_and_whitespace() {
        let parsed = parse_ai_response("  matched_subjects: [guitar, music theory]  \r\nlevel:   beginner");
        assert_eq!(parsed.get(&FilterKey::MatchedSubjects).map(String::as_str), Some("guitar, music theory"));
        assert_eq!(parsed.get(&FilterKey::Level).map(String::as_str), Some("beginner"));
    }

    #[test]
    fn last_line_wins_for_repeated_keys() {
        let parsed = parse_ai_response("category: dance\ncategory: music");
        assert_eq!(parsed.get(&FilterKey::Category).map(String::as_str), Some("music"));
    }

    #[test]
    fn keeps_null_sentinel_for_the_mapper() {
        let parsed = parse_ai_response("location: null");
        assert_eq!(parsed.get(&FilterKey::Location).map(String::as_str), Some("null"));
    }

    #[test]
    fn key_names_inside_values_do_not_match() {
        let parsed = parse_ai_response("search_terms: yoga category: fitness\nnote: category: music");
        assert_eq!(parsed.get(&FilterKey::SearchTerms).map(String::as_str), Some("yoga category: fitness"));
        assert_eq!(parsed.get(&FilterKey::Category), None);
    }

    #[test]
    fn value_keeps_colons_after_the_first() {
        let parsed = parse_ai_response("search_terms: jazz: bebop");
        assert_eq!(parsed.get(&FilterKey::SearchTerms).map(String::as_str), Some("jazz: bebop"));
    }
}
