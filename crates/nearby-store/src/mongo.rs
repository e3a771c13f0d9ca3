//! MongoDB storage adapter.
//!
//! Records live in one collection guarded by a compound unique index over
//! the 2d-indexed `coordinates` field and the `name` field, so the server
//! enforces the `(coordinates, name)` uniqueness invariant and answers
//! `$near` proximity queries from the same index.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};
use nearby_core::error::{NearbyError, Result};
use nearby_core::models::Record;

use crate::ports::RecordStore;

const DATABASE: &str = "nearby";
const COLLECTION: &str = "records";

/// MongoDB server write error code for a unique-index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB connection configuration
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub host: String,
    pub port: u16,
}

impl MongoConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn connection_string(&self) -> String {
        format!("mongodb://{}:{}/", self.host, self.port)
    }
}

/// MongoDB-backed record store
#[derive(Clone)]
pub struct MongoRecordStore {
    client: Client,
    records: Collection<Record>,
}

impl MongoRecordStore {
    /// Build a store from the given configuration.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first operation (`ensure_index` at startup) rather than here.
    pub async fn connect(config: &MongoConfig) -> Result<Self> {
        let client = Client::with_uri_str(config.connection_string())
            .await
            .map_err(|e| NearbyError::StoreUnavailable(e.to_string()))?;
        let records = client.database(DATABASE).collection::<Record>(COLLECTION);
        Ok(Self { client, records })
    }

    /// Shut the client down, closing all server connections.
    pub async fn close(self) {
        self.client.shutdown().await;
    }
}

#[async_trait]
impl RecordStore for MongoRecordStore {
    async fn ensure_index(&self) -> Result<()> {
        let options = IndexOptions::builder().unique(true).build();
        let index = IndexModel::builder()
            .keys(doc! { "coordinates": "2d", "name": -1 })
            .options(options)
            .build();

        self.records
            .create_index(index)
            .await
            .map_err(|e| NearbyError::IndexCreation(e.to_string()))?;
        Ok(())
    }

    async fn insert(&self, record: &Record) -> Result<()> {
        match self.records.insert_one(record).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(NearbyError::DuplicateRecord {
                name: record.name.clone(),
                coordinates: record.coordinates,
            }),
            Err(e) => Err(NearbyError::StoreUnavailable(e.to_string())),
        }
    }

    async fn near(&self, point: [f64; 2], limit: usize) -> Result<Vec<Record>> {
        let filter = doc! { "coordinates": { "$near": [point[0], point[1]] } };

        let cursor = self
            .records
            .find(filter)
            .limit(limit as i64)
            .await
            .map_err(|e| NearbyError::StoreUnavailable(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| NearbyError::StoreUnavailable(e.to_string()))
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_string_from_host_and_port() {
        let config = MongoConfig::new("mongo-db", 27017);
        assert_eq!(config.connection_string(), "mongodb://mongo-db:27017/");
    }
}
