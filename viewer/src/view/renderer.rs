//! Result renderer
//!
//! `render_result` turns a backend result into a `ResultView` (badge
//! colours, formatted date, numbered recommendations). `render_screen`
//! projects a whole `UiState` to plain text for terminal front ends.

use serde::Serialize;

use crate::app::{BannerKind, Section, UiState};
use crate::domain::entities::rating::{UNKNOWN_COLOR, UNKNOWN_LABEL};
use crate::domain::entities::{EnergyRating, RatingResult, Recommendation};

use super::date::format_lodgement_date;

pub const NO_RECOMMENDATIONS_MESSAGE: &str = "No recommendations available for this property.";

const UNKNOWN_LETTER: &str = "?";

/// A coloured rating badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingBadge {
    pub letter: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

impl RatingBadge {
    /// Badge for a raw rating value; anything outside A-G is "Unknown"
    pub fn for_rating(rating: Option<&str>) -> Self {
        match rating.and_then(EnergyRating::from_letter) {
            Some(rating) => Self {
                letter: rating.letter(),
                label: rating.label(),
                color: rating.color(),
            },
            None => Self::unknown(),
        }
    }

    pub fn unknown() -> Self {
        Self {
            letter: UNKNOWN_LETTER,
            label: UNKNOWN_LABEL,
            color: UNKNOWN_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedRecommendation {
    /// 1-based position in the list
    pub number: usize,
    pub description: String,
    pub cost: String,
}

/// Either the numbered list or the empty-list placeholder, never both
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RecommendationsView {
    Placeholder(&'static str),
    List(Vec<NumberedRecommendation>),
}

impl RecommendationsView {
    fn from_recommendations(recommendations: &[Recommendation]) -> Self {
        if recommendations.is_empty() {
            return RecommendationsView::Placeholder(NO_RECOMMENDATIONS_MESSAGE);
        }

        RecommendationsView::List(
            recommendations
                .iter()
                .enumerate()
                .map(|(i, rec)| NumberedRecommendation {
                    number: i + 1,
                    description: rec.description.clone(),
                    cost: rec.cost.clone(),
                })
                .collect(),
        )
    }
}

/// Everything the results section shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub address: String,
    pub postcode: String,
    pub current: RatingBadge,
    pub potential: RatingBadge,
    pub lodgement_date: String,
    pub current_efficiency: Option<u32>,
    pub potential_efficiency: Option<u32>,
    pub recommendations: RecommendationsView,
}

/// Render a backend result for the address and postcode the user picked
pub fn render_result(result: &RatingResult, address: &str, postcode: &str) -> ResultView {
    ResultView {
        address: address.to_string(),
        postcode: postcode.to_string(),
        current: RatingBadge::for_rating(result.rating.as_deref()),
        potential: RatingBadge::for_rating(result.potential_rating.as_deref()),
        lodgement_date: format_lodgement_date(result.lodgement_date.as_deref()),
        current_efficiency: result.current_efficiency.and_then(efficiency_score),
        potential_efficiency: result.potential_efficiency.and_then(efficiency_score),
        recommendations: RecommendationsView::from_recommendations(&result.recommendations),
    }
}

fn efficiency_score(value: f64) -> Option<u32> {
    (value.is_finite() && value >= 0.0).then(|| value.round() as u32)
}

/// Render the full screen as plain text
pub fn render_screen(state: &UiState) -> String {
    let mut buf = String::new();

    if state.is_visible(Section::Loading) {
        buf.push_str("Loading...\n\n");
    }

    if let Some(banner) = state.error() {
        let tag = match banner.kind {
            BannerKind::Validation => "[INVALID]",
            BannerKind::Connectivity => "[OFFLINE]",
            BannerKind::Server => "[ERROR]",
            BannerKind::NoResults => "[NO RESULTS]",
        };
        buf.push_str(&format!("{} {}\n\n", tag, banner.message));
    }

    if state.is_visible(Section::Address) {
        let selector = state.selector();
        buf.push_str("## Addresses\n\n");
        for (i, entry) in selector.entries().iter().enumerate() {
            let marker = if i > 0 && selector.selected() == Some(*entry) {
                ">"
            } else {
                " "
            };
            buf.push_str(&format!("{} {:>3}. {}\n", marker, i, entry));
        }
        buf.push('\n');
    }

    if let Some(view) = state.result() {
        buf.push_str(&render_result_text(
            view,
            state.is_visible(Section::Recommendations),
        ));
    }

    buf
}

fn render_result_text(view: &ResultView, with_recommendations: bool) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("## {}, {}\n\n", view.address, view.postcode));
    buf.push_str(&format!("Current rating:   {}\n", render_badge(&view.current)));
    if let Some(score) = view.current_efficiency {
        buf.push_str(&format!("Current efficiency: {}\n", score));
    }
    buf.push_str(&format!("Potential rating: {}\n", render_badge(&view.potential)));
    if let Some(score) = view.potential_efficiency {
        buf.push_str(&format!("Potential efficiency: {}\n", score));
    }
    buf.push_str(&format!("Certificate lodged: {}\n\n", view.lodgement_date));

    if with_recommendations {
        buf.push_str("### Recommendations\n\n");
        match &view.recommendations {
            RecommendationsView::Placeholder(message) => {
                buf.push_str(&format!("_{}_\n", message));
            }
            RecommendationsView::List(items) => {
                for item in items {
                    buf.push_str(&format!(
                        "{}. {} ({})\n",
                        item.number, item.description, item.cost
                    ));
                }
            }
        }
        buf.push('\n');
    }

    buf
}

fn render_badge(badge: &RatingBadge) -> String {
    format!("[{}] {}", badge.letter, badge.label)
}
