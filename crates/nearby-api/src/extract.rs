use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON body extractor whose rejection carries the service's error shape.
///
/// A body that is not valid JSON, or does not match the target DTO, turns
/// into a 400 `ApiError` instead of axum's plain-text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
