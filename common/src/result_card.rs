//! Display model for a single search result card.

use serde::{Deserialize, Serialize};

use crate::search_result::{MentorRecord, ResultSummary, SearchResult};

/// Qualification types that earn the traditional training badge.
pub const TRADITIONAL_TRAINING_TYPES: [&str; 3] = ["traditional_lineage", "guru_shishya_parampara", "cultural_apprenticeship"];
pub const AUTHENTICITY_BADGE_THRESHOLD: f64 = 0.7;
const WORLDWIDE_REGION: &str = "worldwide";
const MISSING_LOCATION: &str = "None, None";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResultBadge {
    Mentor,
    Class,
    CulturalOrigin(String),
    TraditionalTraining,
    CulturallyAuthentic,
}

impl ResultBadge {
    pub fn label(&self) -> String {
        match self {
            ResultBadge::Mentor => "Mentor".to_string(),
            ResultBadge::Class => "Class".to_string(),
            ResultBadge::CulturalOrigin(region) => format!("From {region}"),
            ResultBadge::TraditionalTraining => "Traditional Training".to_string(),
            ResultBadge::CulturallyAuthentic => "Culturally Authentic".to_string(),
        }
    }
}

/// What clicking a card does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NavigationAction {
    /// Hand the mentor record to the profile page through the session cache, then open it.
    OpenMentorProfile { mentor_id: String, mentor: MentorRecord },
    ConfirmClassBooking { class_id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultCardView {
    pub kind_badge: ResultBadge,
    pub secondary_badges: Vec<ResultBadge>,
    pub title: String,
    pub description: String,
    pub price_text: String,
    pub location_text: String,
    pub rating: Option<f64>,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub action: NavigationAction,
}

pub fn render_result_card(result: &SearchResult) -> ResultCardView {
    let (kind_badge, mentor, action) = match result {
        SearchResult::Mentor(m) => (
            ResultBadge::Mentor,
            Some(&m.data),
            NavigationAction::OpenMentorProfile { mentor_id: m.id.clone(), mentor: m.data.clone() },
        ),
        SearchResult::Class(c) => (
            ResultBadge::Class,
            None,
            NavigationAction::ConfirmClassBooking { class_id: c.id.clone() },
        ),
    };
    let summary = result.summary();
    ResultCardView {
        kind_badge,
        secondary_badges: secondary_badges(summary, mentor),
        title: summary.title.clone(),
        description: summary.description.clone(),
        price_text: price_text(summary.price),
        location_text: location_text(summary.location.as_deref()),
        rating: summary.rating,
        tags: summary.tags.clone(),
        image_url: summary.image_url.clone(),
        action,
    }
}

fn secondary_badges(summary: &ResultSummary, mentor: Option<&MentorRecord>) -> Vec<ResultBadge> {
    let mut badges = Vec::new();
    let metadata = summary.search_metadata.as_ref();

    if let Some(region) = metadata.and_then(|m| m.cultural_origin_region.as_deref()) {
        let region = region.trim();
        if !region.is_empty() && !region.eq_ignore_ascii_case(WORLDWIDE_REGION) {
            badges.push(ResultBadge::CulturalOrigin(region.to_string()));
        }
    }

    let traditional = mentor.is_some_and(|m| {
        m.qualifications.iter().any(|q| TRADITIONAL_TRAINING_TYPES.contains(&q.kind.as_str()))
    });
    if traditional {
        badges.push(ResultBadge::TraditionalTraining);
    }

    if metadata.and_then(|m| m.cultural_authenticity_score).is_some_and(|score| score >= AUTHENTICITY_BADGE_THRESHOLD) {
        badges.push(ResultBadge::CulturallyAuthentic);
    }

    badges
}

/// A zero price is shown like a missing one; see DESIGN.md.
pub fn price_text(price: Option<f64>) -> String {
    match price {
        Some(price) if price > 0.0 => {
            if price.fract() == 0.0 {
                format!("${price:.0}")
            } else {
                format!("${price:.2}")
            }
        }
        _ => "Price on request".to_string(),
    }
}

pub fn location_text(location: Option<&str>) -> String {
    match location.map(str::trim) {
        Some(location) if !location.is_empty() && location != MISSING_LOCATION => location.to_string(),
        _ => "Location flexible".to_string(),
    }
}
