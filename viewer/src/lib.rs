//! EPC Viewer
//!
//! Headless view controller for an energy performance certificate lookup:
//! search a postcode, pick an address, show the current and potential
//! rating with improvement recommendations.
//! Uses hexagonal (ports & adapters) architecture so the controller can be
//! driven without a real backend or a real screen.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod view;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

pub use adapters::HttpEpcBackend;
pub use app::{ControllerEvent, Effect, UiState, UserAction, ViewController};
pub use config::Config;
pub use domain::ports::EpcBackend;
pub use error::{BackendError, DomainError};
