//! Feedback handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use feedback_types::{messages, Feedback, MessageResponse, NewFeedback};
use serde_json::Value;

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let req_body = read_new_feedback(&headers, &body)?;

    state
        .store
        .insert(&req_body)
        .await
        .map_err(ApiError::SaveFailed)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(messages::FEEDBACK_RECEIVED)),
    ))
}

/// Turn a create body into a request.
///
/// A body that is not declared as JSON, is empty, or is a JSON array yields an
/// empty request. Only undecodable JSON and bare scalars are refused.
fn read_new_feedback(headers: &HeaderMap, body: &[u8]) -> Result<NewFeedback, ApiError> {
    if !is_json(headers) || body.is_empty() {
        return Ok(NewFeedback::default());
    }

    match serde_json::from_slice::<Value>(body).map_err(ApiError::MalformedBody)? {
        object @ Value::Object(_) => {
            serde_json::from_value(object).map_err(ApiError::MalformedBody)
        }
        Value::Array(_) => Ok(NewFeedback::default()),
        _ => Err(ApiError::MalformedBody(<serde_json::Error as serde::de::Error>::custom(
            "expected a JSON object",
        ))),
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Feedback>>, ApiError> {
    let feedbacks = state.store.list().await.map_err(ApiError::ListFailed)?;
    Ok(Json(feedbacks))
}
