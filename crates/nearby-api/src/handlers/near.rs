use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use nearby_core::models::NEAR_LIMIT;

use crate::dto::{NearRequest, RecordResponse};
use crate::error::ApiError;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /near - return the stored records nearest the query point.
///
/// Records come back in ascending distance order, at most `NEAR_LIMIT`
/// entries. An empty store yields an empty array.
pub async fn handle_near(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<NearRequest>,
) -> Result<Json<Vec<RecordResponse>>, ApiError> {
    let records = state
        .store
        .near(request.coordinates, NEAR_LIMIT)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "proximity query failed");
            ApiError::from(err)
        })?;

    Ok(Json(records.into_iter().map(RecordResponse::from).collect()))
}
