use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_social_icons::MdSchool;
use dioxus_free_icons::Icon;

use common::search_query::MarketplaceQuery;
use crate::routes::Route;

const EXAMPLE_QUESTIONS: &[&str] = &[
    "I want a certified sitar teacher in Varanasi under $40",
    "online dance classes for kids",
    "beginner pottery with a free first session",
];

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Mentor Marketplace - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}

            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                SearchCard {}
                ExampleQuestionsCard {}
            }
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            img {
                src: asset!("/assets/favicon.svg"),
                alt: "Marketplace Logo",
                style: "width: 46px; height: 46px;",
            },
            span { "Find your" }
            span { style: "color:#4F46E5;", "mentor" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 30px;
                line-height: 1.6;
                max-width: 620px;
                font-weight: 500;
            ",
            "Learn music, dance, crafts and languages from mentors who carry the tradition. Ask in your own words."
        }
    }
}

#[component]
fn SearchCard() -> Element {
    rsx! {
        div {
            id: "x-card-text-search",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                min-height: 260px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            div {
                style: "font-size: 30px; font-weight: 500;",
                "Search mentors and classes"
            }
            div {
                style: "
                    font-size: 20px;
                    font-weight: 500;
                    line-height: 1.5;
                    color: rgba(255,255,255,0.92);
                ",
                "Type a skill, or describe what you are looking for. Longer questions are turned into filters for you."
            }
            div { style: "height: 8px; padding-top: 7px; margin-top:7px; border-top: 1px solid white; width: 100%; " }
            SearchCardInput {}
        }
    }
}

#[component]
fn SearchCardInput() -> Element {
    let n2 = navigator();
    let mut search_q = use_signal(|| "".to_string());
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                color: #111827;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "e.g. tabla lessons for teens",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 14px;
                ",
                oninput: move |e| {
                    *search_q.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        let search_q = MarketplaceQuery::from_query_string(search_q.read().clone());
                        if !search_q.is_empty() {
                            n2.push(Route::search_page_from_query(search_q));
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ExampleQuestionsCard() -> Element {
    rsx! {
        div {
            id: "x-card-example-questions",
            style: "
                display:flex;
                flex-direction: column;
                gap: 12px;
                width: 520px;
                min-height: 260px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: white;
                color: #111827;
                border: 1px solid #E5E7EB;
                box-shadow: 0 6px 16px rgba(0,0,0,0.06);
            ",
            div {
                style: "display:flex; align-items:center; gap: 10px; font-size: 24px; font-weight: 500;",
                Icon { icon: MdSchool, style: "width: 26px; height: 26px; color:#4F46E5;" }
                "Try asking"
            }
            for question in EXAMPLE_QUESTIONS.iter() {
                Link {
                    key: "{question}",
                    to: Route::search_page_from_query(MarketplaceQuery::from_query_string(*question)),
                    div {
                        class: "marketplace-hover-shadow-background",
                        style: "
                            padding: 10px 14px;
                            border-radius: 12px;
                            background: #F5F6F8;
                            color: #3730A3;
                            font-size: 16px;
                        ",
                        "{question}"
                    }
                }
            }
        }
    }
}
