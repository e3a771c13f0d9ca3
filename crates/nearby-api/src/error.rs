use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nearby_core::error::NearbyError;
use serde::Serialize;

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<NearbyError> for ApiError {
    fn from(err: NearbyError) -> Self {
        match &err {
            NearbyError::MalformedRequest { .. } => {
                Self::bad_request("Malformed request").with_details(err.to_string())
            }
            NearbyError::StoreUnavailable(_) | NearbyError::IndexCreation(_) => {
                Self::internal("Store unavailable").with_details(err.to_string())
            }
            // Duplicates are swallowed by the Add handler before they can
            // reach the error mapping.
            NearbyError::DuplicateRecord { .. } => {
                Self::internal("Internal error").with_details(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        NearbyError::MalformedRequest {
            reason: rejection.body_text(),
        }
        .into()
    }
}
