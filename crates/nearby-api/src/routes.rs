use std::sync::Arc;

use axum::{routing::post, Router};

use crate::handlers::{handle_add, handle_near};
use crate::state::AppState;

/// Build the application router: `/add` and `/near`, nothing else.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/add", post(handle_add))
        .route("/near", post(handle_near))
        .with_state(state)
}
