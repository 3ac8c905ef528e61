//! A single mentor or class card in the result grid.

use common::result_card::{NavigationAction, ResultBadge, ResultCardView};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_communication_icons::MdLocationOn, icons::md_toggle_icons::MdStar};

use crate::{
    data_definitions::session_cache::{SESSION_KEY_MENTOR, SessionCache},
    routes::Route,
};

/// Writes whatever the destination page needs into the session cache, then navigates.
pub fn follow_navigation_action(session: &SessionCache, action: &NavigationAction) -> Route {
    match action {
        NavigationAction::OpenMentorProfile { mentor_id, mentor } => {
            session.write_json(SESSION_KEY_MENTOR, mentor);
            Route::MentorProfilePage { mentor_id: mentor_id.clone() }
        }
        NavigationAction::ConfirmClassBooking { class_id } => Route::BookingConfirmationPage { class_id: class_id.clone() },
    }
}

fn badge_colors(badge: &ResultBadge) -> (&'static str, &'static str) {
    match badge {
        ResultBadge::Mentor => ("#DBEAFE", "#1E40AF"),
        ResultBadge::Class => ("#DCFCE7", "#166534"),
        ResultBadge::CulturalOrigin(_) => ("#FEF3C7", "#92400E"),
        ResultBadge::TraditionalTraining => ("#EDE9FE", "#5B21B6"),
        ResultBadge::CulturallyAuthentic => ("#FCE7F3", "#9D174D"),
    }
}

#[component]
pub fn SearchResultCard(card: ResultCardView) -> Element {
    let session = use_context::<SessionCache>();
    let action = card.action.clone();
    let open = move |_| {
        let route = follow_navigation_action(&session, &action);
        tracing::info!("opening {:?}", route);
        navigator().push(route);
    };

    rsx! {
        div {
            class: "marketplace-result-card marketplace-hover-shadow-background",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                margin: 8px;
                padding: 14px;
                border-radius: 14px;
                background: white;
                border: 1px solid #E5E7EB;
                cursor: pointer;
                min-height: 220px;
            ",
            onclick: open,

            if let Some(image_url) = card.image_url.clone() {
                img {
                    src: "{image_url}",
                    alt: "{card.title}",
                    style: "width: 100%; height: 140px; object-fit: cover; border-radius: 10px;",
                }
            }

            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
                CardBadge { badge: card.kind_badge.clone() }
                for badge in card.secondary_badges.iter() {
                    CardBadge { key: "{badge.label()}", badge: badge.clone() }
                }
            }

            CardTitleSection { title: card.title.clone() }

            div {
                style: "
                    font-size: 15px;
                    line-height: 21px;
                    color: #374151;
                    overflow: hidden;
                    display: -webkit-box;
                    -webkit-line-clamp: 3;
                    -webkit-box-orient: vertical;
                ",
                "{card.description}"
            }

            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 14px; font-size: 14px; color: #4B5563;",
                span { style: "font-weight: 600; color: #111827;", "{card.price_text}" }
                span {
                    style: "display: flex; align-items: center; gap: 3px;",
                    Icon { icon: MdLocationOn, style: "width: 16px; height: 16px;" }
                    "{card.location_text}"
                }
                if let Some(rating) = card.rating {
                    span {
                        style: "display: flex; align-items: center; gap: 3px; color: #B45309;",
                        Icon { icon: MdStar, style: "width: 16px; height: 16px;" }
                        "{rating:.1}"
                    }
                }
            }

            if !card.tags.is_empty() {
                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 4px;",
                    for tag in card.tags.iter() {
                        span {
                            key: "{tag}",
                            style: "font-size: 12px; padding: 2px 8px; border-radius: 10px; background: #F3F4F6; color: #4B5563;",
                            "{tag}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CardBadge(badge: ResultBadge) -> Element {
    let (background, color) = badge_colors(&badge);
    rsx! {
        span {
            style: "
                font-size: 12px;
                font-weight: 600;
                padding: 2px 9px;
                border-radius: 10px;
                background: {background};
                color: {color};
            ",
            "{badge.label()}"
        }
    }
}

#[component]
fn CardTitleSection(title: String) -> Element {
    rsx! {
        div {
            style: "
                font-size: 20px;
                line-height: 28px;
                font-weight: 400;
                color: rgb(0, 0, 0);
                overflow: hidden;
                text-overflow: ellipsis;
                white-space: nowrap;
                min-width: 0;
            ",
            "{title}"
        }
    }
}
