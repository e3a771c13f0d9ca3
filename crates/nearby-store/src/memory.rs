//! In-memory storage implementation for development and testing.
//!
//! This implementation uses `RwLock::unwrap()` intentionally. Lock poisoning
//! only occurs when another thread panicked while holding the lock, which is
//! an unrecoverable state. For production workloads, use the MongoDB backend.

use async_trait::async_trait;
use nearby_core::error::{NearbyError, Result};
use nearby_core::models::Record;
use rstar::primitives::GeomWithData;
use rstar::RTree;
use std::sync::{Arc, RwLock};

use crate::ports::RecordStore;

type IndexedRecord = GeomWithData<[f64; 2], String>;

/// In-memory implementation of RecordStore.
///
/// Records are held in an R-tree keyed by their coordinates, with the name
/// as payload. Distance is planar Euclidean, matching the 2d contract of the
/// MongoDB backend. Ties in distance follow the tree's traversal order,
/// stable for a given tree state.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    tree: Arc<RwLock<RTree<IndexedRecord>>>,
}

impl MemoryRecordStore {
    /// Create a new empty in-memory record store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.tree.read().unwrap().size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn ensure_index(&self) -> Result<()> {
        // Uniqueness is checked on every insert; nothing to build up front.
        Ok(())
    }

    async fn insert(&self, record: &Record) -> Result<()> {
        let mut tree = self.tree.write().unwrap();

        let duplicate = tree
            .locate_all_at_point(&record.coordinates)
            .any(|stored| stored.data == record.name);
        if duplicate {
            return Err(NearbyError::DuplicateRecord {
                name: record.name.clone(),
                coordinates: record.coordinates,
            });
        }

        tree.insert(GeomWithData::new(record.coordinates, record.name.clone()));
        Ok(())
    }

    async fn near(&self, point: [f64; 2], limit: usize) -> Result<Vec<Record>> {
        let tree = self.tree.read().unwrap();

        Ok(tree
            .nearest_neighbor_iter(&point)
            .take(limit)
            .map(|stored| Record::new(stored.data.clone(), *stored.geom()))
            .collect())
    }
}
