//! EPC backend HTTP client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::entities::{Postcode, RatingResult};
use crate::domain::ports::{EpcBackend, HealthStatus, SearchResponse};
use crate::error::BackendError;

/// Implementation of the EPC backend client.
///
/// No timeout is configured; requests rely on the transport defaults.
#[derive(Clone)]
pub struct HttpEpcBackend {
    http: Client,
    base_url: String,
}

/// Error body the backend sends with non-2xx responses
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl HttpEpcBackend {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, BackendError> {
        tracing::debug!(path = %path, "GET");

        let response = self
            .http
            .get(self.api_url(path))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| BackendError::Connection(e.to_string()))?;

        self.handle_response(path, response).await
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| BackendError::Deserialization(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(path = %path, status = status.as_u16(), "backend returned an error");
            Err(BackendError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            })
        }
    }
}

/// Pull the `error` field out of a JSON error body, if there is one
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
}

#[async_trait]
impl EpcBackend for HttpEpcBackend {
    async fn health(&self) -> Result<HealthStatus, BackendError> {
        self.get("/health").await
    }

    async fn search(&self, postcode: &Postcode) -> Result<SearchResponse, BackendError> {
        self.get(&format!("/search?postcode={}", encode(postcode.as_str())))
            .await
    }

    async fn rating(
        &self,
        postcode: &Postcode,
        address: &str,
    ) -> Result<RatingResult, BackendError> {
        self.get(&format!(
            "/rating?postcode={}&address={}",
            encode(postcode.as_str()),
            encode(address)
        ))
        .await
    }
}
