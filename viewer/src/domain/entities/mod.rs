//! Domain entities
//!
//! Everything here is request-scoped: fetched, rendered, then dropped on
//! the next search.

pub mod certificate;
pub mod postcode;
pub mod rating;

pub use certificate::{RatingResult, Recommendation, COST_NOT_AVAILABLE};
pub use postcode::Postcode;
pub use rating::EnergyRating;
