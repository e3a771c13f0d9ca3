//! Nearby Core - Domain model and error taxonomy
//!
//! This crate contains the record model and the error types shared by the
//! storage adapters and the HTTP front end.

pub mod error;
pub mod models;

pub use error::{NearbyError, Result};
pub use models::{Record, NEAR_LIMIT};
