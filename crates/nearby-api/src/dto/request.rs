use serde::Deserialize;

/// Add request body
///
/// `coordinates` must be exactly two numbers; serde rejects any other shape
/// before the handler runs.
#[derive(Debug, Deserialize)]
pub struct AddRequest {
    pub name: String,
    pub coordinates: [f64; 2],
}

/// Near request body
#[derive(Debug, Deserialize)]
pub struct NearRequest {
    pub coordinates: [f64; 2],
}
