use dioxus::prelude::*;
use common::search_query::MarketplaceQuery;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};
use crate::{components::search_components::search_filter_strip::SearchFilterStrip, routes::Route};


#[component]
pub fn SearchInputTopBar(original_query: ReadSignal<MarketplaceQuery>) -> Element {
    let mut modified_search_query = use_signal(|| original_query.read().clone());
    // navigation does not reset local signals, so follow the url
    use_effect(move || {
        let new_query = original_query.read().clone();
        modified_search_query.set(new_query);
    });
    let query_has_changed = use_memo(move || modified_search_query.read().clone() != original_query.read().clone());
    let search_button_color = use_memo(move || if query_has_changed() { "#4F46E5" } else { "#6B7280" });
    let trigger_search = move |_: ()| {
        navigator().push(Route::search_page_from_query(modified_search_query.read().clone()));
    };
    let search_oninput = move |event: Event<FormData>| {
        modified_search_query.write().query_string = event.value();
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search(());
        }
    };
    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 520px;
                margin-left: 16px;
                flex-shrink: 0;
            ",

            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                aria_label: "Search",
                onclick: move |_| {
                    trigger_search(())
                },
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "text",
                placeholder: "Try \"guitar teacher for kids near me\"",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 18px;
                    font-weight: 400;
                    font-family: Roboto, sans-serif;
                ",
                value: "{modified_search_query.read().query_string}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
        }
        SearchFilterStrip { modified_search_query, trigger_search }
    }
}
