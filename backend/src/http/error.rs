//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::data::DataError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Data layer error
    Data(DataError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg)),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Data(e) => match e {
                // A reversed window is the user's mistake, not ours.
                DataError::InvalidRange { .. } => {
                    (StatusCode::BAD_REQUEST, ApiError::new("INVALID_RANGE", e.to_string()))
                }
                DataError::Empty => (StatusCode::NOT_FOUND, ApiError::new("NO_DATA", e.to_string())),
                other => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("DATA_ERROR", other.to_string()),
                ),
            },
        };

        (status, Json(error)).into_response()
    }
}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        AppError::Data(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_maps_to_bad_request() {
        let err = AppError::Data(DataError::InvalidRange {
            start: "2021-05-01".parse().unwrap(),
            end: "2021-02-01".parse().unwrap(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_with_details() {
        let err = ApiError::new("BAD_REQUEST", "bad window").with_details("start after end");
        assert_eq!(err.details.as_deref(), Some("start after end"));
    }
}
