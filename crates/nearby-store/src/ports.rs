use async_trait::async_trait;
use nearby_core::error::Result;
use nearby_core::models::Record;

/// Port for record storage with a geospatial uniqueness index.
///
/// The `(coordinates, name)` pair is unique per store; the index is the sole
/// arbiter of insert conflicts, so concurrent identical inserts need no
/// coordination above this trait.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Ensure the compound unique index over `(coordinates, name)` exists.
    ///
    /// Idempotent; called once at startup before any requests are served.
    /// Fails with `IndexCreation` for anything other than "already exists".
    async fn ensure_index(&self) -> Result<()>;

    /// Insert a record.
    ///
    /// Fails with `DuplicateRecord` when an identical `(coordinates, name)`
    /// pair is already stored, and `StoreUnavailable` for any other failure.
    async fn insert(&self, record: &Record) -> Result<()>;

    /// Return up to `limit` records ordered by ascending distance to `point`.
    ///
    /// Ties in distance follow the backing index's native ordering, stable
    /// for a given index state.
    async fn near(&self, point: [f64; 2], limit: usize) -> Result<Vec<Record>>;
}
