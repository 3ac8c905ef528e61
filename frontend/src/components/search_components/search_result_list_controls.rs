//! Header row above the result list.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdRefresh};

use crate::components::search_components::search_results_panel::SearchResultsState;

#[component]
pub fn SearchResultListControls() -> Element {
    rsx! {
        div {
            id: "x-search-panel-title-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 7px;
                margin: 1px;
                height: 56px;
                width: 100%;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112);  border-bottom: 1px solid rgb(75, 87, 112);",
                SearchResultCountString { }
            }
            div {
                style: "flex-grow: 1;"
            }
            RefreshResultsButton {}
        }
    }
}

#[component]
fn SearchResultCountString() -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    let count_text = use_memo(move || {
        if search_results_state.phase.read().is_in_flight() {
            return "Searching...".to_string();
        }
        let outcome = search_results_state.outcome.read();
        match outcome.as_ref().map(|outcome| &outcome.result) {
            Some(Ok(response)) => match response.total_results() {
                1 => "1 result".to_string(),
                count => format!("{count} results"),
            },
            Some(Err(_)) => "No results".to_string(),
            None => "Results".to_string(),
        }
    });

    rsx! { "{count_text}" }
}

#[component]
fn RefreshResultsButton() -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    let busy = search_results_state.phase.read().is_in_flight();
    let has_outcome = search_results_state.outcome.read().is_some();
    if !has_outcome || busy {
        return rsx! {};
    }
    rsx! {
        button {
            class: "marketplace-hover-shadow-background",
            title: "Run this search again",
            style: "
                display: flex;
                align-items: center;
                justify-content: center;
                width: 36px;
                height: 36px;
                border-radius: 18px;
                color: rgb(75, 87, 112);
                cursor: pointer;
            ",
            onclick: move |_| search_results_state.retry.call(()),
            Icon { icon: MdRefresh, style: "width: 22px; height: 22px;" }
        }
    }
}
