//! Nearby Store - Record storage port and adapters
//!
//! This crate defines the record storage port and provides two adapters:
//! a MongoDB-backed store for production and an in-memory store for
//! development and testing.

pub mod memory;
pub mod mongo;
pub mod ports;

pub use memory::MemoryRecordStore;
pub use mongo::{MongoConfig, MongoRecordStore};
pub use ports::RecordStore;
