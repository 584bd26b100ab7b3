//! EPC backend port trait
//!
//! The three GET endpoints the viewer consumes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Postcode, RatingResult};
use crate::error::BackendError;

/// `GET /search` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub addresses: Vec<String>,
    /// Postcode as the backend normalized it (spaces removed)
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
}

impl SearchResponse {
    pub fn new(addresses: Vec<String>) -> Self {
        Self {
            addresses,
            postcode: None,
            count: None,
        }
    }
}

/// `GET /health` body; any 2xx counts as reachable regardless of content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
}

#[async_trait]
pub trait EpcBackend: Send + Sync {
    /// Reachability check
    async fn health(&self) -> Result<HealthStatus, BackendError>;

    /// Addresses registered under a postcode, in backend order
    async fn search(&self, postcode: &Postcode) -> Result<SearchResponse, BackendError>;

    /// Certificate data for one address
    async fn rating(
        &self,
        postcode: &Postcode,
        address: &str,
    ) -> Result<RatingResult, BackendError>;
}
