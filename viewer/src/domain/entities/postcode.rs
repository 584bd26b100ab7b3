//! Postcode entity
//!
//! The search key typed by the user.

use serde::Serialize;

use crate::error::DomainError;

pub const EMPTY_POSTCODE_MESSAGE: &str = "Please enter a postcode";

/// A user-entered postcode, trimmed and upper-cased.
///
/// Inner spacing is kept as typed; the backend strips it itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Postcode(String);

impl Postcode {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let normalized = input.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(DomainError::Validation(EMPTY_POSTCODE_MESSAGE.to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Postcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Postcode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
