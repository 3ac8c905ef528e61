//! Tells the user how their question was turned into a search.

use common::filter_mapper::EnhancementSummary;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdInfo};

#[component]
pub fn EnhancementBanner(enhancement: EnhancementSummary) -> Element {
    let message = enhancement.message();
    rsx! {
        div {
            id: "x-search-enhancement-banner",
            role: "status",
            style: "
                display: flex;
                flex-direction: row;
                align-items: flex-start;
                gap: 10px;
                margin: 8px;
                padding: 10px 14px;
                border-radius: 10px;
                background: #EEF2FF;
                color: #3730A3;
                font-size: 15px;
                line-height: 21px;
            ",
            Icon { icon: MdInfo, style: "width: 20px; height: 20px; flex-shrink: 0;" }
            span { "{message}" }
        }
    }
}
