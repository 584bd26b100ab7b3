//! Certificate lookup result
//!
//! What the backend returns for a single postcode + address pair.

use serde::{Deserialize, Deserializer, Serialize};

use super::rating::EnergyRating;

/// Shown when the backend has no indicative cost for a recommendation
pub const COST_NOT_AVAILABLE: &str = "Cost not available";

/// Helper to deserialize null as default (empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_cost<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let cost: Option<String> = Option::deserialize(deserializer)?;
    Ok(cost
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| COST_NOT_AVAILABLE.to_string()))
}

fn cost_not_available() -> String {
    COST_NOT_AVAILABLE.to_string()
}

/// A single improvement suggested on the certificate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub description: String,
    #[serde(default = "cost_not_available", deserialize_with = "deserialize_cost")]
    pub cost: String,
}

/// Energy rating and recommendations for one property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingResult {
    /// Current rating letter as sent; may be missing or outside A-G
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub potential_rating: Option<String>,
    #[serde(default)]
    pub lodgement_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub recommendations: Vec<Recommendation>,

    // Optional extras the backend echoes back
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    /// SAP score, 1-100
    #[serde(default)]
    pub current_efficiency: Option<f64>,
    #[serde(default)]
    pub potential_efficiency: Option<f64>,
}

impl RatingResult {
    pub fn current(&self) -> Option<EnergyRating> {
        self.rating.as_deref().and_then(EnergyRating::from_letter)
    }

    pub fn potential(&self) -> Option<EnergyRating> {
        self.potential_rating
            .as_deref()
            .and_then(EnergyRating::from_letter)
    }
}
