//! Explicit filters shown under the search box. They become URL filters,
//! which take precedence over anything the AI suggests.

use common::{search_params::SearchParamKey, search_query::MarketplaceQuery};
use dioxus::prelude::*;

const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("", "Any category"),
    ("music", "Music"),
    ("dance", "Dance"),
    ("art", "Art"),
    ("language", "Language"),
    ("fitness", "Fitness"),
    ("cooking", "Cooking"),
    ("crafts", "Crafts"),
    ("academics", "Academics"),
];
const AGE_GROUP_OPTIONS: &[(&str, &str)] = &[("", "Any age"), ("kids", "Kids"), ("teens", "Teens"), ("adults", "Adults"), ("seniors", "Seniors")];
const FORMAT_OPTIONS: &[(&str, &str)] = &[("", "Any format"), ("online", "Online"), ("in-person", "In person")];
const LEVEL_OPTIONS: &[(&str, &str)] = &[("", "Any level"), ("beginner", "Beginner"), ("intermediate", "Intermediate"), ("advanced", "Advanced")];

const CONTROL_STYLE: &str = "
    height: 34px;
    padding: 0 10px;
    font-size: 14px;
    border-radius: 8px;
    background: white;
    color: #111827;
    border: 1px solid #D1D5DB;
";

#[component]
pub fn SearchFilterStrip(modified_search_query: Signal<MarketplaceQuery>, trigger_search: Callback<()>) -> Element {
    rsx! {
        div {
            id: "x-search-filter-strip",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                gap: 8px;
                margin-left: 16px;
                overflow-x: auto;
            ",
            FilterSelect { filter_key: SearchParamKey::Category, options: CATEGORY_OPTIONS, modified_search_query, trigger_search }
            FilterSelect { filter_key: SearchParamKey::AgeGroup, options: AGE_GROUP_OPTIONS, modified_search_query, trigger_search }
            FilterSelect { filter_key: SearchParamKey::Format, options: FORMAT_OPTIONS, modified_search_query, trigger_search }
            FilterSelect { filter_key: SearchParamKey::Level, options: LEVEL_OPTIONS, modified_search_query, trigger_search }
            FilterTextInput { filter_key: SearchParamKey::City, placeholder: "City", input_type: "text", modified_search_query, trigger_search }
            FilterTextInput { filter_key: SearchParamKey::MaxRate, placeholder: "Max $/session", input_type: "number", modified_search_query, trigger_search }
            FilterToggle { filter_key: SearchParamKey::IsVerified, label: "Verified mentors", modified_search_query, trigger_search }
            FilterToggle { filter_key: SearchParamKey::FirstSessionFree, label: "Free first session", modified_search_query, trigger_search }
        }
    }
}

#[component]
fn FilterSelect(
    filter_key: SearchParamKey,
    options: &'static [(&'static str, &'static str)],
    mut modified_search_query: Signal<MarketplaceQuery>,
    trigger_search: Callback<()>,
) -> Element {
    let current = modified_search_query.read().filter(filter_key.as_str()).unwrap_or_default().to_string();
    rsx! {
        select {
            style: CONTROL_STYLE,
            aria_label: filter_key.as_str(),
            onchange: move |event: Event<FormData>| {
                modified_search_query.write().set_filter(filter_key.as_str(), event.value());
                trigger_search.call(());
            },
            for (value, label) in options.iter() {
                option {
                    key: "{value}",
                    value: *value,
                    selected: *value == current,
                    "{label}"
                }
            }
        }
    }
}

/// Applied on Enter so typing does not reload results on every keystroke.
#[component]
fn FilterTextInput(
    filter_key: SearchParamKey,
    placeholder: &'static str,
    input_type: &'static str,
    mut modified_search_query: Signal<MarketplaceQuery>,
    trigger_search: Callback<()>,
) -> Element {
    let current = modified_search_query.read().filter(filter_key.as_str()).unwrap_or_default().to_string();
    rsx! {
        input {
            r#type: input_type,
            placeholder: placeholder,
            style: "{CONTROL_STYLE} width: 130px;",
            value: "{current}",
            oninput: move |event: Event<FormData>| {
                modified_search_query.write().set_filter(filter_key.as_str(), event.value());
            },
            onkeydown: move |event: Event<KeyboardData>| {
                if event.key() == Key::Enter {
                    trigger_search.call(());
                }
            },
        }
    }
}

#[component]
fn FilterToggle(
    filter_key: SearchParamKey,
    label: &'static str,
    mut modified_search_query: Signal<MarketplaceQuery>,
    trigger_search: Callback<()>,
) -> Element {
    let enabled = modified_search_query.read().filter(filter_key.as_str()) == Some("true");
    let (background, color) = if enabled { ("#EEF2FF", "#4338CA") } else { ("white", "#111827") };
    rsx! {
        button {
            style: "{CONTROL_STYLE} background: {background}; color: {color}; cursor: pointer;",
            aria_pressed: "{enabled}",
            onclick: move |_| {
                let value = if enabled { "" } else { "true" };
                modified_search_query.write().set_filter(filter_key.as_str(), value);
                trigger_search.call(());
            },
            "{label}"
        }
    }
}
