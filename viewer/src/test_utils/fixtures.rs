//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{RatingResult, Recommendation};

/// A typical D-rated result with two recommendations
pub fn test_rating_result() -> RatingResult {
    RatingResult {
        rating: Some("D".to_string()),
        potential_rating: Some("B".to_string()),
        lodgement_date: Some("2019-11-28".to_string()),
        recommendations: vec![
            test_recommendation("Increase loft insulation to 270 mm", "£100 - £350"),
            test_recommendation("Solar water heating", "£4,000 - £6,000"),
        ],
        address: Some("1 High Street".to_string()),
        postcode: Some("AB12CD".to_string()),
        current_efficiency: Some(61.0),
        potential_efficiency: Some(84.0),
    }
}

pub fn test_recommendation(description: &str, cost: &str) -> Recommendation {
    Recommendation {
        description: description.to_string(),
        cost: cost.to_string(),
    }
}
