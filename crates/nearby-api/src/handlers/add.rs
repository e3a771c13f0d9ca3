use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use nearby_core::error::NearbyError;
use nearby_core::models::Record;

use crate::dto::AddRequest;
use crate::error::ApiError;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /add - store a named coordinate.
///
/// Inserting a pair that is already stored is a success: the conflict is
/// swallowed so that replaying the same Add is a no-op. The response body is
/// empty either way.
pub async fn handle_add(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<AddRequest>,
) -> Result<StatusCode, ApiError> {
    let record = Record::new(request.name, request.coordinates);

    match state.store.insert(&record).await {
        Ok(()) => {}
        Err(NearbyError::DuplicateRecord { .. }) => {
            tracing::debug!(
                name = %record.name,
                coordinates = ?record.coordinates,
                "duplicate record, skipping insertion"
            );
        }
        Err(err) => {
            tracing::error!(error = %err, "record insertion failed");
            return Err(err.into());
        }
    }

    Ok(StatusCode::OK)
}
