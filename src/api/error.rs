//! Request failure taxonomy and its HTTP mapping

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::release::error::{FetchError, InvalidVersionError};

/// Wire shape of every non-success response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// Ways a request can fail after passing authorization
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body did not decode into the expected envelope
    #[error("Invalid request body: {0}")]
    BadRequest(String),

    /// A version string in the parameters or the tag list did not parse
    #[error(transparent)]
    InvalidVersion(#[from] InvalidVersionError),

    /// The upstream tag fetch failed
    #[error("Failed to fetch releases: {0}")]
    Fetch(#[from] FetchError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidVersion(_) => StatusCode::BAD_REQUEST,
            Self::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(&self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_version_maps_to_bad_request() {
        let error = ApiError::from(InvalidVersionError::new("nope"));

        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn bad_request_body_maps_to_bad_request() {
        let error = ApiError::BadRequest("unexpected end of input".to_string());

        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn fetch_failure_maps_to_internal_server_error() {
        let error = ApiError::from(FetchError::NotFound("acme/widgets".to_string()));

        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
