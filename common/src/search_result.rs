use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use tracing::warn;

/// Backend records are sparse: a `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(id) => Ok(id.to_string()),
        other => Err(D::Error::custom(format!("expected a string or numeric id, got {other}"))),
    }
}

/// Drops records that still fail to decode instead of failing the whole page.
fn lenient_results<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<SearchResult>, D::Error> {
    let raw: Vec<serde_json::Value> = null_as_default(deserializer)?;
    let total = raw.len();
    let results: Vec<SearchResult> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(result) => Some(result),
            Err(e) => {
                warn!("skipping search result {index} of {total}: {e}");
                None
            }
        })
        .collect();
    Ok(results)
}

/// Response body of `GET /search/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "lenient_results")]
    pub results: Vec<SearchResult>,
    #[serde(default, rename = "totalResults", skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
}

impl SearchResponse {
    pub fn total_results(&self) -> u64 {
        self.total_results.unwrap_or(self.results.len() as u64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchResult {
    Mentor(MentorResult),
    Class(ClassResult),
}

impl SearchResult {
    pub fn id(&self) -> &str {
        match self {
            SearchResult::Mentor(m) => &m.id,
            SearchResult::Class(c) => &c.id,
        }
    }

    pub fn summary(&self) -> &ResultSummary {
        match self {
            SearchResult::Mentor(m) => &m.summary,
            SearchResult::Class(c) => &c.summary,
        }
    }
}

/// Display fields every result carries regardless of its type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub search_metadata: Option<SearchMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchMetadata {
    #[serde(default)]
    pub cultural_origin_region: Option<String>,
    #[serde(default)]
    pub cultural_authenticity_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorResult {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(flatten)]
    pub summary: ResultSummary,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: MentorRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassResult {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(flatten)]
    pub summary: ResultSummary,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: ClassRecord,
}

/// Mentor as sent by the backend.
///
/// Fields not modelled here are kept in `extra` so the whole record can be
/// handed to the profile page unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MentorRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub qualifications: Vec<Qualification>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl MentorRecord {
    pub fn display_name(&self) -> Option<&str> {
        ["name", "displayName", "fullName"]
            .iter()
            .find_map(|field| self.extra.get(*field).and_then(|v| v.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Qualification {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClassRecord {
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_both_result_variants() {
        let body = serde_json::json!({
            "results": [
                {
                    "type": "mentor",
                    "id": "m-1",
                    "title": "Asha Rao",
                    "price": 25.0,
                    "location": "Mysuru, India",
                    "tags": ["veena"],
                    "searchMetadata": { "cultural_origin_region": "South India" },
                    "data": {
                        "name": "Asha Rao",
                        "qualifications": [{ "type": "traditional_lineage", "title": "Gurukula" }],
                        "yearsExperience": 12
                    }
                },
                {
                    "type": "class",
                    "id": "c-9",
                    "title": "Intro to Tabla",
                    "data": { "schedule": "Sat 10am" }
                }
            ]
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();

        assert_eq!(response.total_results(), 2);
        let SearchResult::Mentor(mentor) = &response.results[0] else { panic!("expected mentor") };
        assert_eq!(mentor.data.display_name(), Some("Asha Rao"));
        assert_eq!(mentor.data.qualifications[0].kind, "traditional_lineage");
        assert_eq!(mentor.data.extra.get("yearsExperience"), Some(&serde_json::json!(12)));
        assert_eq!(
            mentor.summary.search_metadata.as_ref().and_then(|m| m.cultural_origin_region.as_deref()),
            Some("South India")
        );
        assert_eq!(response.results[1].id(), "c-9");
        assert_eq!(response.results[1].summary().price, None);
    }

    #[test]
    fn sparse_records_do_not_sink_the_list() {
        let body = serde_json::json!({
            "results": [
                { "type": "class", "id": 17, "title": "Kathak Basics", "data": { "schedule": "Sun 9am" } },
                {
                    "type": "mentor",
                    "id": "m-2",
                    "title": null,
                    "description": null,
                    "tags": null,
                    "price": null,
                    "data": { "name": "Ravi", "qualifications": null }
                },
                { "type": "class", "id": "c-4", "data": null }
            ]
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();

        assert_eq!(response.results.len(), 3);
        assert_eq!(response.results[0].id(), "17");
        let SearchResult::Mentor(mentor) = &response.results[1] else { panic!("expected mentor") };
        assert_eq!(mentor.summary, ResultSummary::default());
        assert_eq!(mentor.data.qualifications, Vec::new());
        assert_eq!(mentor.data.display_name(), Some("Ravi"));
        assert_eq!(response.results[2].id(), "c-4");
    }

    #[test]
    fn undecodable_record_is_skipped() {
        let body = serde_json::json!({
            "results": [
                { "type": "workshop", "id": "w-1" },
                { "type": "mentor", "id": "m-5", "data": {} },
                { "type": "class", "id": ["not", "an", "id"], "data": {} }
            ],
            "totalResults": 3
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();

        let ids: Vec<&str> = response.results.iter().map(SearchResult::id).collect();
        assert_eq!(ids, vec!["m-5"]);
        assert_eq!(response.total_results(), 3);
    }

    #[test]
    fn null_results_read_as_empty() {
        let response: SearchResponse = serde_json::from_str(r#"{"results": null}"#).unwrap();
        assert_eq!(response.total_results(), 0);
    }

    #[test]
    fn total_results_prefers_backend_count() {
        let response: SearchResponse = serde_json::from_str(r#"{"results": [], "totalResults": 42}"#).unwrap();
        assert_eq!(response.total_results(), 42);
    }
}
