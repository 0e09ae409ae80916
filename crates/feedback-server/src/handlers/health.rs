//! Liveness probe

use axum::Json;
use feedback_types::{messages, MessageResponse};

/// Answers as long as the process is up; never touches the store.
pub async fn health() -> Json<MessageResponse> {
    Json(MessageResponse::new(messages::BACKEND_RUNNING))
}
