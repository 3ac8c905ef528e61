use dioxus::prelude::*;

use common::search_query::MarketplaceQuery;
use crate::{
    components::{
        search_components::{search_input_top_bar::SearchInputTopBar, search_results_panel::SearchResultsPanel},
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::url_param::UrlParam,
};

fn title_ellipsis(title: &str) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title.to_string()
    }
}

#[component]
pub fn SearchPage(query: UrlParam<MarketplaceQuery>) -> Element {
    rsx! {
        Title { "Marketplace Search: {title_ellipsis(&query.0.query_string)}" }
        SearchPageRootComponent { query: query.0.clone() }
    }
}

#[component]
fn SearchPageRootComponent(query: ReadSignal<MarketplaceQuery>) -> Element {
    rsx! {
        div {
            id: "x-search-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    min-height: 76px;
                    padding: 8px 0;
                    width: 100%;
                ",
                SearchInputTopBar { original_query: query }
            }

            div {
                id: "x-search-results-bottom-space",
                style: r#"
                    width: 100%;
                    flex-grow: 1;
                    min-height: 0;
                    background-color: #ECEEF2;
                "#,
                SuspendWrapper { SearchResultsPanel { query } }
            }
        }
    }
}
