//! Side navigation bar component.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::session_cache::{SESSION_KEY_USER, SessionCache, SessionUser};
use common::search_query::MarketplaceQuery;
use crate::routes::Route;

use dioxus_free_icons::icons::md_action_icons::MdHome;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_social_icons::MdPerson;
use dioxus_free_icons::{Icon, IconShape};


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",


            nav {
                id:"x-nav-sidebar",
                style:"
                    display:flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 70px;
                    height: 100%;
                    background-color: #1E1B4B;
                    padding: 16px;
                ",

                NavbarTopLogo{},
                NavbarTopIconLinks{},

                div {
                    style: "flex-grow:1;"
                }
                NavbarSignedInUser{},
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px; height: 100%; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn NavbarTopLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage { },
            img { src: asset!("/assets/favicon.svg"), alt: "Marketplace", style: "width: 38px; height: 38px;" }
        }
    }
}

#[component]
fn NavbarTopIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",
            IconLink { to: Route::HomePage { }, icon: MdHome, label: "Home" }
            IconLink { to: Route::search_page_from_query(MarketplaceQuery::default()), icon: MdSearch, label: "Search" }
        }
    }
}

/// Reads the cached login once on mount; the login flow owns the entry.
#[component]
fn NavbarSignedInUser() -> Element {
    let session = use_context::<SessionCache>();
    let user = use_hook(move || session.read_json::<SessionUser>(SESSION_KEY_USER));
    let label = match &user {
        Some(user) => format!("Signed in as {}", user.label()),
        None => "Not signed in".to_string(),
    };
    let color = if user.is_some() { "#A5B4FC" } else { "#6B7280" };

    rsx! {
        div {
            title: "{label}",
            style: "
                display:flex;
                width: 38px;
                align-items: center;
                justify-content: center;
                color: {color};
            ",
            Icon { icon: MdPerson, style: "width: 26px; height: 26px;" }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                style: "color:white;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
