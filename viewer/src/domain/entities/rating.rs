//! Energy rating entity
//!
//! The A (best) to G (worst) letter scale and its badge presentation.

use serde::{Deserialize, Serialize};

/// Label shown for a missing or unrecognised rating
pub const UNKNOWN_LABEL: &str = "Unknown";
/// Neutral badge colour for a missing or unrecognised rating
pub const UNKNOWN_COLOR: &str = "#6c757d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyRating {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl EnergyRating {
    pub const ALL: [EnergyRating; 7] = [
        EnergyRating::A,
        EnergyRating::B,
        EnergyRating::C,
        EnergyRating::D,
        EnergyRating::E,
        EnergyRating::F,
        EnergyRating::G,
    ];

    /// Exact letter match. Anything else, lower case included, is unknown.
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "A" => Some(EnergyRating::A),
            "B" => Some(EnergyRating::B),
            "C" => Some(EnergyRating::C),
            "D" => Some(EnergyRating::D),
            "E" => Some(EnergyRating::E),
            "F" => Some(EnergyRating::F),
            "G" => Some(EnergyRating::G),
            _ => None,
        }
    }

    pub fn letter(&self) -> &'static str {
        match self {
            EnergyRating::A => "A",
            EnergyRating::B => "B",
            EnergyRating::C => "C",
            EnergyRating::D => "D",
            EnergyRating::E => "E",
            EnergyRating::F => "F",
            EnergyRating::G => "G",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EnergyRating::A => "Excellent",
            EnergyRating::B => "Good",
            EnergyRating::C => "Fairly Good",
            EnergyRating::D => "Average",
            EnergyRating::E => "Below Average",
            EnergyRating::F => "Poor",
            EnergyRating::G => "Very Poor",
        }
    }

    /// Standard EPC band colour
    pub fn color(&self) -> &'static str {
        match self {
            EnergyRating::A => "#008054",
            EnergyRating::B => "#19b459",
            EnergyRating::C => "#8dce46",
            EnergyRating::D => "#ffd500",
            EnergyRating::E => "#fcaa65",
            EnergyRating::F => "#ef8023",
            EnergyRating::G => "#e9153b",
        }
    }
}

impl std::fmt::Display for EnergyRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl std::str::FromStr for EnergyRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_letter(s).ok_or_else(|| format!("Unknown energy rating: {}", s))
    }
}
