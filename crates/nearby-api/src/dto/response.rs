use nearby_core::models::Record;
use serde::Serialize;

/// One entry of a proximity query response.
///
/// Carries exactly the fields of the stored record and nothing else.
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub name: String,
    pub coordinates: [f64; 2],
}

impl From<Record> for RecordResponse {
    fn from(record: Record) -> Self {
        Self {
            name: record.name,
            coordinates: record.coordinates,
        }
    }
}
