//! HTTP error responses
//!
//! Failures are logged here and replaced by a fixed message; the underlying
//! error never reaches the caller.

use crate::storage::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use feedback_types::{messages, MessageResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to save feedback: {0}")]
    SaveFailed(#[source] StoreError),

    #[error("failed to retrieve feedbacks: {0}")]
    ListFailed(#[source] StoreError),

    #[error("malformed request body: {0}")]
    MalformedBody(#[source] serde_json::Error),
}

impl ApiError {
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::SaveFailed(_) => messages::SAVE_FAILED,
            ApiError::ListFailed(_) => messages::LIST_FAILED,
            ApiError::MalformedBody(_) => messages::MALFORMED_BODY,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Store operation failed");
        } else {
            tracing::warn!(error = %self, "Rejected request");
        }
        (
            status,
            Json(MessageResponse::new(self.public_message())),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_message_hides_detail() {
        let err = ApiError::SaveFailed(StoreError::Unavailable("password auth failed".into()));
        assert_eq!(err.public_message(), messages::SAVE_FAILED);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_list_failure_message() {
        let err = ApiError::ListFailed(StoreError::Unavailable("down".into()));
        assert_eq!(err.public_message(), messages::LIST_FAILED);
        assert!(err.to_string().contains("down"));
    }

    #[test]
    fn test_malformed_body_is_client_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::MalformedBody(source);
        assert_eq!(err.public_message(), messages::MALFORMED_BODY);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
