//! HTTP adapter
//!
//! The EPC backend reached over plain HTTP with reqwest.

pub mod client;

pub use client::HttpEpcBackend;
