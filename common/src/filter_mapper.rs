//! Translation of AI filter suggestions into backend search parameters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ai_response_parser::{FilterKey, ParsedFilterSet};
use crate::search_params::{ParamValue, SearchParamKey, is_blank_value};

const VERIFIED_QUALIFICATIONS: &[&str] = &["certified", "qualified", "verified", "traditional", "trained"];

/// AI keys copied verbatim, with the backend name they map to.
const PASS_THROUGH: &[(FilterKey, SearchParamKey)] = &[
    (FilterKey::Category, SearchParamKey::Category),
    (FilterKey::AgeGroup, SearchParamKey::AgeGroup),
    (FilterKey::Format, SearchParamKey::Format),
    (FilterKey::Location, SearchParamKey::City),
    (FilterKey::Level, SearchParamKey::Level),
];

fn usable_value(parsed: &ParsedFilterSet, key: FilterKey) -> Option<&str> {
    parsed.get(&key).map(|v| v.trim()).filter(|v| !is_blank_value(v))
}

/// Integer prefix parse: `"30"`, `"30.5"` and `"30 dollars"` all give 30.
/// Leading digits of `value`, saturating at `u32::MAX`.
fn parse_leading_int(value: &str) -> Option<u32> {
    let digits: String = value.trim_start().chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    // only overflow can fail here
    Some(digits.parse().unwrap_or(u32::MAX))
}

/// `search_terms` is left to the orchestrator, `matched_subjects` is display only.
pub fn map_filters(parsed: &ParsedFilterSet) -> BTreeMap<SearchParamKey, ParamValue> {
    let mut mapped = BTreeMap::new();

    if let Some(qualification) = usable_value(parsed, FilterKey::MentorQualification) {
        if VERIFIED_QUALIFICATIONS.contains(&qualification.to_lowercase().as_str()) {
            mapped.insert(SearchParamKey::IsVerified, ParamValue::Bool(true));
        }
    }

    if let Some(max_rate) = usable_value(parsed, FilterKey::MaxPrice).and_then(parse_leading_int) {
        if max_rate > 0 {
            mapped.insert(SearchParamKey::MaxRate, ParamValue::Int(max_rate));
        }
    }

    if usable_value(parsed, FilterKey::FreeTrial) == Some("true") {
        mapped.insert(SearchParamKey::FirstSessionFree, ParamValue::Bool(true));
    }

    for (ai_key, backend_key) in PASS_THROUGH {
        if let Some(value) = usable_value(parsed, *ai_key) {
            mapped.insert(*backend_key, ParamValue::Text(value.to_string()));
        }
    }

    mapped
}

/// What the search page shows after a query was enhanced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EnhancementSummary {
    pub search_terms: String,
    pub applied_filters: Vec<(String, String)>,
    pub matched_subjects: Vec<String>,
}

impl EnhancementSummary {
    pub fn message(&self) -> String {
        let mut message = format!("Searching for \"{}\"", self.search_terms);
        if !self.applied_filters.is_empty() {
            let filters = self.applied_filters.iter().map(|(k, v)| format!("{k}: {v}")).collect::<Vec<_>>();
            message.push_str(&format!(" with {}", filters.join(", ")));
        }
        if !self.matched_subjects.is_empty() {
            message.push_str(&format!(". Matched subjects: {}", self.matched_subjects.join(", ")));
        }
        message
    }
}

fn filter_label(key: SearchParamKey) -> &'static str {
    match key {
        SearchParamKey::Category => "category",
        SearchParamKey::AgeGroup => "age group",
        SearchParamKey::Format => "format",
        SearchParamKey::City => "city",
        SearchParamKey::Level => "level",
        SearchParamKey::IsVerified => "verified mentors",
        SearchParamKey::MaxRate => "max rate",
        SearchParamKey::FirstSessionFree => "free first session",
    }
}

pub fn describe_enhancement(
    parsed: &ParsedFilterSet,
    search_terms: &str,
    applied: &BTreeMap<SearchParamKey, ParamValue>,
) -> EnhancementSummary {
    let matched_subjects = usable_value(parsed, FilterKey::MatchedSubjects)
        .map(|subjects| {
            subjects.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
        })
        .unwrap_or_default();
    EnhancementSummary {
        search_terms: search_terms.to_string(),
        applied_filters: applied.iter().map(|(k, v)| (filter_label(*k).to_string(), v.to_string())).collect(),
        matched_subjects,
    }
}
