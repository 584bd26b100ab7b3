//! Domain ports (traits)
//!
//! Port traits define interfaces that the controller requires.
//! Adapters provide concrete implementations of these traits.

pub mod backend;

pub use backend::{EpcBackend, HealthStatus, SearchResponse};
