//! Entry page for a mentor picked from the search results.

use dioxus::prelude::*;

use common::{result_card::TRADITIONAL_TRAINING_TYPES, search_result::{MentorRecord, Qualification}};
use crate::{
    data_definitions::session_cache::{SESSION_KEY_MENTOR, SessionCache},
    routes::Route,
};

#[component]
pub fn MentorProfilePage(mentor_id: String) -> Element {
    let session = use_context::<SessionCache>();
    // the result card writes the record right before navigating here
    let mentor = use_hook(move || session.read_json::<MentorRecord>(SESSION_KEY_MENTOR));
    let name = mentor.as_ref().and_then(|m| m.display_name()).unwrap_or("Mentor").to_string();

    rsx! {
        Title { "Mentor Marketplace - {name}" }
        div {
            id: "x-mentor-profile-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 18px;
                padding: 36px 40px;
                max-width: 860px;
            ",
            h1 { style: "font-size: 40px; font-weight: 500; color: #0F172A; margin: 0;", "{name}" }
            div { style: "font-size: 14px; color: #6B7280;", "Mentor id: {mentor_id}" }

            {match mentor {
                Some(mentor) => rsx! { QualificationList { mentor } },
                None => rsx! {
                    div {
                        style: "font-size: 18px; color: #4B5563;",
                        "Profile details are not available. Open this mentor from the search results to see them."
                    }
                },
            }}

            Link {
                to: Route::HomePage {},
                span { style: "color: #4F46E5; font-size: 18px;", "Back to search" }
            }
        }
    }
}

fn qualification_label(qualification: &Qualification) -> String {
    match &qualification.title {
        Some(title) if !title.trim().is_empty() => title.clone(),
        _ => qualification.kind.replace('_', " "),
    }
}

#[component]
fn QualificationList(mentor: MentorRecord) -> Element {
    if mentor.qualifications.is_empty() {
        return rsx! {
            div { style: "font-size: 18px; color: #4B5563;", "No qualifications listed." }
        };
    }
    rsx! {
        h2 { style: "font-size: 24px; font-weight: 500; margin: 0;", "Qualifications" }
        ul {
            style: "display:flex; flex-direction: column; gap: 8px; margin: 0;",
            for (index, qualification) in mentor.qualifications.iter().enumerate() {
                li {
                    key: "{index}",
                    style: "font-size: 18px; color: #111827;",
                    "{qualification_label(qualification)}"
                    if TRADITIONAL_TRAINING_TYPES.contains(&qualification.kind.as_str()) {
                        span {
                            style: "margin-left: 8px; font-size: 12px; padding: 2px 9px; border-radius: 10px; background: #EDE9FE; color: #5B21B6;",
                            "Traditional Training"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untitled_qualification_falls_back_to_its_type() {
        let untitled = Qualification { kind: "guru_shishya_parampara".to_string(), title: None };
        let titled = Qualification { kind: "certificate".to_string(), title: Some("Sangeet Visharad".to_string()) };
        assert_eq!(qualification_label(&untitled), "guru shishya parampara");
        assert_eq!(qualification_label(&titled), "Sangeet Visharad");
    }
}
