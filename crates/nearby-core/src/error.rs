//! Error types for Nearby

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NearbyError {
    // Request errors
    #[error("Malformed request: {reason}")]
    MalformedRequest { reason: String },

    // Store errors
    #[error("Record already stored: {name} at {coordinates:?}")]
    DuplicateRecord {
        name: String,
        coordinates: [f64; 2],
    },

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Index creation failed: {0}")]
    IndexCreation(String),
}

pub type Result<T> = std::result::Result<T, NearbyError>;
