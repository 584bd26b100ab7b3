//! Mock implementation of the backend port
//!
//! In-memory backend that can be configured per postcode/address and
//! records every call so tests can verify what was requested.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Postcode, RatingResult};
use crate::domain::ports::{EpcBackend, HealthStatus, SearchResponse};
use crate::error::BackendError;

type RatingKey = (String, String);

#[derive(Clone, Default)]
pub struct MockEpcBackend {
    /// Postcode -> addresses. Unknown postcodes return an empty list.
    addresses: Arc<RwLock<HashMap<String, Vec<String>>>>,
    /// (postcode, address) -> rating. Unknown pairs return a bare 404.
    ratings: Arc<RwLock<HashMap<RatingKey, Result<RatingResult, BackendError>>>>,
    search_error: Arc<RwLock<Option<BackendError>>>,
    health_error: Arc<RwLock<Option<BackendError>>>,
    /// Every call fails with a connection error
    unreachable: Arc<RwLock<bool>>,
    search_calls: Arc<RwLock<Vec<String>>>,
    rating_calls: Arc<RwLock<Vec<RatingKey>>>,
}

impl MockEpcBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unreachable() -> Self {
        let backend = Self::default();
        *backend.unreachable.write().unwrap() = true;
        backend
    }

    /// Configure the addresses returned for a postcode
    pub fn with_addresses(self, postcode: &str, addresses: &[&str]) -> Self {
        self.addresses.write().unwrap().insert(
            postcode.to_string(),
            addresses.iter().map(|a| a.to_string()).collect(),
        );
        self
    }

    /// Configure the rating returned for an address
    pub fn with_rating(self, postcode: &str, address: &str, rating: RatingResult) -> Self {
        self.ratings
            .write()
            .unwrap()
            .insert((postcode.to_string(), address.to_string()), Ok(rating));
        self
    }

    pub fn with_rating_error(self, postcode: &str, address: &str, error: BackendError) -> Self {
        self.ratings
            .write()
            .unwrap()
            .insert((postcode.to_string(), address.to_string()), Err(error));
        self
    }

    /// Every search fails with this error
    pub fn with_search_error(self, error: BackendError) -> Self {
        *self.search_error.write().unwrap() = Some(error);
        self
    }

    pub fn with_health_error(self, error: BackendError) -> Self {
        *self.health_error.write().unwrap() = Some(error);
        self
    }

    /// Postcodes searched, in call order
    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.read().unwrap().clone()
    }

    /// (postcode, address) pairs requested, in call order
    pub fn rating_calls(&self) -> Vec<(String, String)> {
        self.rating_calls.read().unwrap().clone()
    }

    fn connection_error(&self) -> Option<BackendError> {
        if *self.unreachable.read().unwrap() {
            Some(BackendError::Connection("connection refused".to_string()))
        } else {
            None
        }
    }
}

#[async_trait]
impl EpcBackend for MockEpcBackend {
    async fn health(&self) -> Result<HealthStatus, BackendError> {
        if let Some(e) = self.connection_error() {
            return Err(e);
        }
        if let Some(e) = self.health_error.read().unwrap().clone() {
            return Err(e);
        }

        Ok(HealthStatus {
            status: Some("healthy".to_string()),
            database: Some("connected".to_string()),
        })
    }

    async fn search(&self, postcode: &Postcode) -> Result<SearchResponse, BackendError> {
        self.search_calls
            .write()
            .unwrap()
            .push(postcode.as_str().to_string());

        if let Some(e) = self.connection_error() {
            return Err(e);
        }
        if let Some(e) = self.search_error.read().unwrap().clone() {
            return Err(e);
        }

        let addresses = self
            .addresses
            .read()
            .unwrap()
            .get(postcode.as_str())
            .cloned()
            .unwrap_or_default();

        Ok(SearchResponse::new(addresses))
    }

    async fn rating(
        &self,
        postcode: &Postcode,
        address: &str,
    ) -> Result<RatingResult, BackendError> {
        let key = (postcode.as_str().to_string(), address.to_string());
        self.rating_calls.write().unwrap().push(key.clone());

        if let Some(e) = self.connection_error() {
            return Err(e);
        }

        self.ratings
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or(Err(BackendError::Api {
                status: 404,
                message: None,
            }))
    }
}
