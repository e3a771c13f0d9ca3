//! Record model shared by the store and the HTTP layer.

use serde::{Deserialize, Serialize};

/// Maximum number of records a proximity query returns.
pub const NEAR_LIMIT: usize = 100;

/// A stored `(name, coordinates)` pair.
///
/// `name` is a free-form label and not unique by itself; the store enforces
/// uniqueness over the `(coordinates, name)` pair. The wire shape and the
/// persisted shape are identical, so store-internal identifiers never leak
/// into responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub coordinates: [f64; 2],
}

impl Record {
    pub fn new(name: impl Into<String>, coordinates: [f64; 2]) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_internal_fields_are_ignored() {
        let raw = r#"{"_id":"deadbeef","name":"pier","coordinates":[4.9,52.4]}"#;
        let record: Record = serde_json::from_str(raw).unwrap();
        assert_eq!(record, Record::new("pier", [4.9, 52.4]));
    }

    #[test]
    fn coordinates_must_be_a_pair() {
        assert!(serde_json::from_str::<Record>(r#"{"name":"a","coordinates":[1.0]}"#).is_err());
        assert!(
            serde_json::from_str::<Record>(r#"{"name":"a","coordinates":[1.0,2.0,3.0]}"#).is_err()
        );
    }
}
