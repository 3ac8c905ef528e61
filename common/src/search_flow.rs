//! Search orchestration: classify, optionally enhance through the chat
//! endpoint, merge URL filters, then run the backend search.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::ai_response_parser::{FilterKey, parse_ai_response};
use crate::error::{SearchBackendError, SearchFailure};
use crate::filter_mapper::{EnhancementSummary, describe_enhancement, map_filters};
use crate::query_classifier::is_natural_language_query;
use crate::search_params::{BackendSearchParams, is_blank_value, merge_url_filters};
use crate::search_result::SearchResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Classifying,
    EnhancingViaAi,
    Searching,
    Success,
    Error,
}

impl SearchPhase {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SearchPhase::Classifying | SearchPhase::EnhancingViaAi | SearchPhase::Searching)
    }

    pub fn status_text(&self) -> &'static str {
        match self {
            SearchPhase::Idle => "",
            SearchPhase::Classifying => "Reading your search...",
            SearchPhase::EnhancingViaAi => "Understanding your request...",
            SearchPhase::Searching => "Searching...",
            SearchPhase::Success => "",
            SearchPhase::Error => "",
        }
    }
}

/// The two remote calls a search needs.
///
/// The page implements this over server functions, the server over HTTP.
#[allow(async_fn_in_trait)]
pub trait MarketplaceBackend {
    async fn ai_chat(&self, message: String) -> Result<String, SearchBackendError>;
    async fn search(&self, params: &BackendSearchParams) -> Result<SearchResponse, SearchBackendError>;
}

pub fn build_enhancement_prompt(raw_query: &str) -> String {
    format!(
        "You help people search a marketplace of mentors and classes.
Turn the search below into filters. Reply with exactly these lines and nothing else,
using null for anything the search does not mention:

search_terms: [the core subject or skill to search for]
category: [music, dance, art, language, fitness, cooking, crafts or academics]
age_group: [kids, teens, adults or seniors]
format: [online or in-person]
location: [city name]
level: [beginner, intermediate or advanced]
mentor_qualification: [certified, qualified, verified, traditional or trained]
max_price: [maximum price per session as a whole number]
free_trial: [true or false]
matched_subjects: [comma separated related subjects]

Search: \"{raw_query}\""
    )
}

/// Result of one `run_search` call, published only if its ticket is still current.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub params: BackendSearchParams,
    pub enhancement: Option<EnhancementSummary>,
    pub result: Result<SearchResponse, SearchFailure>,
}

impl SearchOutcome {
    pub fn phase(&self) -> SearchPhase {
        match self.result {
            Ok(_) => SearchPhase::Success,
            Err(_) => SearchPhase::Error,
        }
    }
}

/// Identifies one search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Hands out tickets; only the latest one may publish state.
///
/// Older requests are not cancelled, they finish and their results are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchGeneration {
    current: u64,
}

impl SearchGeneration {
    pub fn begin(&mut self) -> SearchTicket {
        self.current += 1;
        SearchTicket(self.current)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.current
    }
}

async fn enhance<B: MarketplaceBackend>(backend: &B, raw_query: &str) -> Result<(BackendSearchParams, EnhancementSummary), SearchBackendError> {
    let response = backend.ai_chat(build_enhancement_prompt(raw_query)).await?;
    let parsed = parse_ai_response(&response);
    debug!("enhancement parsed {} filters", parsed.len());

    let q = parsed
        .get(&FilterKey::SearchTerms)
        .map(|terms| terms.trim())
        .filter(|terms| !is_blank_value(terms))
        .unwrap_or(raw_query)
        .to_string();
    let filters = map_filters(&parsed);
    let summary = describe_enhancement(&parsed, &q, &filters);
    Ok((BackendSearchParams { q, filters }, summary))
}

/// Runs one search to completion, reporting each phase through `on_phase`.
///
/// Enhancement is attempted once and any failure falls back to the raw query.
/// The search call is attempted once; its failure becomes a `SearchFailure`.
pub async fn run_search<B: MarketplaceBackend>(
    backend: &B,
    raw_query: &str,
    url_filters: &BTreeMap<String, String>,
    mut on_phase: impl FnMut(SearchPhase),
) -> SearchOutcome {
    on_phase(SearchPhase::Classifying);
    let (mut params, enhancement) = if is_natural_language_query(raw_query) {
        on_phase(SearchPhase::EnhancingViaAi);
        match enhance(backend, raw_query).await {
            Ok((params, summary)) => (params, Some(summary)),
            Err(e) => {
                warn!("query enhancement failed, searching for the raw query: {e}");
                (BackendSearchParams::from_query(raw_query), None)
            }
        }
    } else {
        (BackendSearchParams::from_query(raw_query), None)
    };
    merge_url_filters(&mut params, url_filters);

    on_phase(SearchPhase::Searching);
    let result = match backend.search(&params).await {
        Ok(response) => {
            info!("search for {:?} returned {} results", params.q, response.total_results());
            Ok(response)
        }
        Err(e) => {
            warn!("search for {:?} failed: {e}", params.q);
            Err(SearchFailure::from(&e))
        }
    };
    let outcome = SearchOutcome { params, enhancement, result };
    on_phase(outcome.phase());
    outcome
}

/// Runs `run_search` for `ticket`, forwarding phases only while the ticket is
/// still current.
///
/// Returns the outcome if the ticket is still current when the search ends,
/// `None` if a newer search took over in the meantime.
pub async fn run_current_search<B: MarketplaceBackend>(
    backend: &B,
    ticket: SearchTicket,
    is_current: impl Fn(SearchTicket) -> bool,
    raw_query: &str,
    url_filters: &BTreeMap<String, String>,
    mut publish_phase: impl FnMut(SearchPhase),
) -> Option<SearchOutcome> {
    let outcome = run_search(backend, raw_query, url_filters, |phase| {
        if is_current(ticket) {
            publish_phase(phase);
        }
    })
    .await;
    if is_current(ticket) {
        Some(outcome)
    } else {
        debug!("discarding stale results for {raw_query:?}");
        None
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::result_card::{ResultBadge, render_result_card};
    use crate::search_params::{ParamValue, SearchParamKey};
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct FakeBackend {
        chat_reply: Option<Result<String, SearchBackendError>>,
        search_reply: Option<Result<SearchResponse, SearchBackendError>>,
        chat_messages: RefCell<Vec<String>>,
        searches: RefCell<Vec<BackendSearchParams>>,
    }

    impl MarketplaceBackend for FakeBackend {
        async fn ai_chat(&self, message: String) -> Result<String, SearchBackendError> {
            self.chat_messages.borrow_mut().push(message);
            self.chat_reply.clone().unwrap_or_else(|| Err(SearchBackendError::Unreachable("no reply".to_string())))
        }

        async fn search(&self, params: &BackendSearchParams) -> Result<SearchResponse, SearchBackendError> {
            self.searches.borrow_mut().push(params.clone());
            self.search_reply.clone().unwrap_or_else(|| Ok(SearchResponse::default()))
        }
    }

    fn run(backend: &FakeBackend, query: &str, url_filters: &[(&str, &str)]) -> (SearchOutcome, Vec<SearchPhase>) {
        let url_filters = url_filters.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        let mut phases = Vec::new();
        let outcome = block_on(run_search(backend, query, &url_filters, |phase| phases.push(phase)));
        (outcome, phases)
    }

    #[test]
    fn keyword_query_skips_enhancement() {
        let backend = FakeBackend::default();
        let (outcome, phases) = run(&backend, "ballet", &[("city", "Pune")]);

        assert!(backend.chat_messages.borrow().is_empty());
        assert_eq!(phases, vec![SearchPhase::Classifying, SearchPhase::Searching, SearchPhase::Success]);
        assert_eq!(outcome.params.q, "ballet");
        assert_eq!(outcome.params.get(SearchParamKey::City), Some(&ParamValue::Text("Pune".to_string())));
        assert_eq!(outcome.enhancement, None);
    }

    #[test]
    fn natural_language_query_is_enhanced_end_to_end() {
        let body = serde_json::json!({
            "results": [
                {
                    "type": "mentor",
                    "id": "m-3",
                    "title": "Arjun",
                    "data": { "qualifications": [{ "type": "traditional_lineage" }] }
                },
                { "type": "class", "id": "c-1", "title": "Guitar 101", "data": {} }
            ]
        });
        let backend = FakeBackend {
            chat_reply: Some(Ok("search_terms: guitar\nmax_price: 25\nfree_trial: true".to_string())),
            search_reply: Some(Ok(serde_json::from_value(body).unwrap())),
            ..Default::default()
        };

        let (outcome, phases) = run(&backend, "affordable guitar teacher with free trial", &[]);

        assert_eq!(
            phases,
            vec![SearchPhase::Classifying, SearchPhase::EnhancingViaAi, SearchPhase::Searching, SearchPhase::Success]
        );
        assert!(backend.chat_messages.borrow()[0].contains("affordable guitar teacher with free trial"));
        let sent = backend.searches.borrow()[0].clone();
        assert_eq!(
            sent.to_query_pairs(),
            vec![
                ("q", "guitar".to_string()),
                ("maxRate", "25".to_string()),
                ("firstSessionFree", "true".to_string()),
            ]
        );

        let response = outcome.result.unwrap();
        let cards: Vec<_> = response.results.iter().map(render_result_card).collect();
        assert_eq!(cards[0].kind_badge, ResultBadge::Mentor);
        assert_eq!(cards[0].secondary_badges, vec![ResultBadge::TraditionalTraining]);
        assert_eq!(cards[1].kind_badge, ResultBadge::Class);
        assert_eq!(outcome.enhancement.map(|e| e.search_terms), Some("guitar".to_string()));
    }

    #[test]
    fn url_filters_beat_ai_filters() {
        let backend = FakeBackend {
            chat_reply: Some(Ok("search_terms: salsa\ncategory: music".to_string())),
            ..Default::default()
        };
        let (outcome, _) = run(&backend, "where can I learn salsa", &[("category", "dance")]);

        assert_eq!(outcome.params.q, "salsa");
        assert_eq!(outcome.params.get(SearchParamKey::Category), Some(&ParamValue::Text("dance".to_string())));
    }

    #[test]
    fn failed_enhancement_falls_back_to_raw_query() {
        let backend = FakeBackend {
            chat_reply: Some(Err(SearchBackendError::Status { code: 500, message: "model overloaded".to_string() })),
            ..Default::default()
        };
        let (outcome, phases) = run(&backend, "cheap sitar lessons", &[]);

        assert_eq!(phases.last(), Some(&SearchPhase::Success));
        assert_eq!(outcome.params, BackendSearchParams::from_query("cheap sitar lessons"));
        assert_eq!(outcome.enhancement, None);
    }

    #[test]
    fn null_search_terms_keep_raw_query() {
        let backend = FakeBackend {
            chat_reply: Some(Ok("search_terms: null\nlevel: beginner".to_string())),
            ..Default::default()
        };
        let (outcome, _) = run(&backend, "pottery for beginners", &[]);

        assert_eq!(outcome.params.q, "pottery for beginners");
        assert_eq!(outcome.params.get(SearchParamKey::Level), Some(&ParamValue::Text("beginner".to_string())));
    }

    #[test]
    fn search_failure_is_surfaced() {
        let backend = FakeBackend {
            search_reply: Some(Err(SearchBackendError::Unreachable("connection refused".to_string()))),
            ..Default::default()
        };
        let (outcome, phases) = run(&backend, "violin", &[]);

        assert_eq!(phases.last(), Some(&SearchPhase::Error));
        assert_eq!(outcome.result, Err(SearchFailure::Connectivity));
    }

    #[test]
    fn only_latest_ticket_is_current() {
        let mut generation = SearchGeneration::default();
        let first = generation.begin();
        let second = generation.begin();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    /// Holds the search for `slow_query` until the gate opens.
    #[derive(Default)]
    struct GatedBackend {
        slow_query: String,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl MarketplaceBackend for GatedBackend {
        async fn ai_chat(&self, _message: String) -> Result<String, SearchBackendError> {
            Err(SearchBackendError::Unreachable("not used".to_string()))
        }

        async fn search(&self, params: &BackendSearchParams) -> Result<SearchResponse, SearchBackendError> {
            if params.q == self.slow_query {
                let gate = self.gate.borrow_mut().take();
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
            }
            Ok(SearchResponse { results: Vec::new(), total_results: Some(params.q.len() as u64) })
        }
    }

    #[test]
    fn older_search_finishing_last_publishes_nothing() {
        let (open_gate, gate) = oneshot::channel();
        let backend = GatedBackend { slow_query: "sitar".to_string(), gate: RefCell::new(Some(gate)) };
        let generation = RefCell::new(SearchGeneration::default());
        let published = RefCell::new(Vec::new());
        let no_filters = BTreeMap::new();
        let is_current = |ticket: SearchTicket| generation.borrow().is_current(ticket);

        let first_ticket = generation.borrow_mut().begin();
        let first = run_current_search(&backend, first_ticket, is_current, "sitar", &no_filters, |phase| {
            published.borrow_mut().push(("sitar", phase))
        });
        let second = async {
            // the user searches again while "sitar" is still waiting on the backend
            let second_ticket = generation.borrow_mut().begin();
            let outcome = run_current_search(&backend, second_ticket, is_current, "tabla", &no_filters, |phase| {
                published.borrow_mut().push(("tabla", phase))
            })
            .await;
            let _ = open_gate.send(());
            outcome
        };

        let (first, second) = block_on(futures::future::join(first, second));

        assert_eq!(first, None);
        assert_eq!(second.map(|outcome| outcome.params.q), Some("tabla".to_string()));
        assert_eq!(
            published.into_inner(),
            vec![
                ("sitar", SearchPhase::Classifying),
                ("sitar", SearchPhase::Searching),
                ("tabla", SearchPhase::Classifying),
                ("tabla", SearchPhase::Searching),
                ("tabla", SearchPhase::Success),
            ]
        );
    }

    #[test]
    fn current_search_publishes_its_outcome() {
        let backend = FakeBackend::default();
        let mut generation = SearchGeneration::default();
        let ticket = generation.begin();
        let mut phases = Vec::new();

        let outcome = block_on(run_current_search(
            &backend,
            ticket,
            |t| generation.is_current(t),
            "violin",
            &BTreeMap::new(),
            |phase| phases.push(phase),
        ));

        assert_eq!(outcome.map(|o| o.phase()), Some(SearchPhase::Success));
        assert_eq!(phases, vec![SearchPhase::Classifying, SearchPhase::Searching, SearchPhase::Success]);
    }
}
