//! View module
//!
//! Pure rendering: certificate results to a declarative view, and the
//! whole UI state to plain text.

pub mod date;
pub mod renderer;

pub use date::format_lodgement_date;
pub use renderer::{
    render_result, render_screen, NumberedRecommendation, RatingBadge, RecommendationsView,
    ResultView, NO_RECOMMENDATIONS_MESSAGE,
};
