//! Error types for the EPC viewer
//!
//! This module defines error types for each layer:
//! - `DomainError`: invalid user input caught before any request is made
//! - `BackendError`: failures talking to the EPC backend over HTTP

use thiserror::Error;

/// Domain layer errors - input that never reaches the backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
}

/// EPC backend client errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The request never produced a response (DNS, refused, reset...)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Non-2xx response. `message` is the JSON `error` field when the body had one.
    #[error("API error: {status} - {}", .message.as_deref().unwrap_or("no error message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// 2xx response whose body does not match the contract
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl BackendError {
    /// Message to put in front of the user.
    ///
    /// Only the server's own message is ever surfaced verbatim; everything
    /// else collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            BackendError::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, BackendError::Connection(_))
    }
}
