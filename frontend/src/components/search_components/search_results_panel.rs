//! Runs searches for the current URL query and shows their results.

use dioxus::prelude::*;

use common::{
    result_card::render_result_card,
    search_flow::{SearchGeneration, SearchOutcome, SearchPhase, run_current_search},
    search_query::MarketplaceQuery,
};
use crate::{
    api::marketplace_api::ServerFnBackend,
    components::{
        error_boundary::SearchErrorNotice,
        search_components::{
            enhancement_banner::EnhancementBanner,
            search_result_card::SearchResultCard,
            search_result_list_controls::SearchResultListControls,
        },
        suspend_boundary::LoadingIndicator,
    },
};

#[derive(Copy, Clone)]
pub struct SearchResultsState {
    pub phase: ReadSignal<SearchPhase>,
    pub outcome: ReadSignal<Option<SearchOutcome>>,
    pub retry: Callback<()>,
}

#[component]
pub fn SearchResultsPanel(query: ReadSignal<MarketplaceQuery>) -> Element {
    let mut generation = use_signal(SearchGeneration::default);
    let mut phase = use_signal(|| SearchPhase::Idle);
    let mut outcome = use_signal(|| None::<SearchOutcome>);
    let mut attempt = use_signal(|| 0_u64);

    // every url change or retry starts a new search; older ones may still
    // finish but only the current ticket is allowed to publish
    use_effect(move || {
        let q = query.read().clone();
        let _ = attempt.read();
        let ticket = generation.write().begin();
        outcome.set(None);
        if q.is_empty() {
            phase.set(SearchPhase::Idle);
            return;
        }
        spawn(async move {
            let published = run_current_search(
                &ServerFnBackend,
                ticket,
                move |ticket| generation.peek().is_current(ticket),
                &q.query_string,
                &q.url_filters,
                move |next| phase.set(next),
            )
            .await;
            if let Some(result) = published {
                outcome.set(Some(result));
            }
        });
    });

    let retry = Callback::new(move |_: ()| {
        *attempt.write() += 1;
    });
    use_context_provider(move || SearchResultsState {
        phase: phase.into(),
        outcome: outcome.into(),
        retry,
    });

    rsx! {
        div {
            id: "x-search-results-panel-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 1px;
                margin: 1px;
                padding: 7px;
                padding-top: 0px;
                height: 100%;
                width: 100%;
            ",
            SearchResultListControls {}

            div {
                style: "
                flex-grow: 1;
                width: 100%;
                min-height: 0;
                ",
                SearchResultsView { }
            }
        }
    }
}

#[component]
fn SearchResultsView() -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    let phase = *search_results_state.phase.read();
    let outcome = search_results_state.outcome.read();

    if phase.is_in_flight() {
        return rsx! { LoadingIndicator { message: phase.status_text().to_string() } };
    }
    let Some(outcome) = outcome.as_ref() else {
        return rsx! { EmptySearchPrompt {} };
    };
    let response = match &outcome.result {
        Ok(response) => response,
        Err(failure) => {
            return rsx! {
                SearchErrorNotice { message: failure.user_message().to_string(), on_retry: search_results_state.retry }
            };
        }
    };

    let cards = response.results.iter().map(|result| (result.id().to_string(), render_result_card(result))).collect::<Vec<_>>();

    rsx! {
        if let Some(enhancement) = outcome.enhancement.clone() {
            EnhancementBanner { enhancement }
        }
        if cards.is_empty() {
            NoResultsMessage { query: outcome.params.q.clone() }
        }
        ul {
            id: "x-search-panel-results-wrapper",
            style: "
                width: 100%;
                height: 100%;
                overflow-y: auto;
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(340px, 1fr));
                align-content: start;
            ",
            for (index, (id, card)) in cards.into_iter().enumerate() {
                li {
                    key: "{index}-{id}",
                    SearchResultCard { card }
                }
            }
        }
    }
}

#[component]
fn EmptySearchPrompt() -> Element {
    rsx! {
        div {
            style: "padding: 24px; font-size: 20px; color: #4B5563;",
            "Search for a mentor, a class or a skill you want to learn."
        }
    }
}

#[component]
fn NoResultsMessage(query: String) -> Element {
    rsx! {
        div {
            style: "padding: 24px; font-size: 20px; color: #4B5563;",
            "No mentors or classes matched \"{query}\". Try fewer filters or different words."
        }
    }
}
