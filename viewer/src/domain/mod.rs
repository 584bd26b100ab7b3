//! Domain layer
//!
//! Contains the EPC lookup concepts with no I/O.
//! - `entities`: postcodes, rating letters, certificate results
//! - `ports`: Trait definition for the EPC backend

pub mod entities;
pub mod ports;
