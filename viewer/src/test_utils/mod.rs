//! Test utilities
//!
//! Manual mock implementation of the backend port and test fixtures.
//!
//! The mock is hand-written rather than generated: the port methods take
//! `&str`/`&Postcode` arguments and the mock needs to record calls and be
//! cloned into the controller while the test keeps a handle to it.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
