//! Rules the browser client applies to a list response
//!
//! Kept free of any browser APIs so the decisions can be tested on the host.

use crate::messages::FETCH_FAILED;
use serde_json::Value;

/// What the client should do with a list response
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    /// Replace the displayed list with these lines, in order
    Lines(Vec<String>),
    /// Body parsed but was not an array; log it and keep the current list
    NotAList(Value),
    /// Replace the displayed list with a single error line
    Failed(String),
}

impl ListOutcome {
    /// Text of the single line shown for a failure
    pub fn error_line(message: &str) -> String {
        format!("Error: {}", message)
    }
}

/// Interpret a finished list request.
///
/// `ok` is whether the HTTP status was a success status, `body` the raw
/// response text.
pub fn interpret_list_response(ok: bool, body: &str) -> ListOutcome {
    let parsed = serde_json::from_str::<Value>(body);

    if !ok {
        let message = match parsed {
            Ok(value) => value
                .get("message")
                .and_then(truthy_text)
                .unwrap_or_else(|| FETCH_FAILED.to_string()),
            Err(e) => e.to_string(),
        };
        return ListOutcome::Failed(message);
    }

    match parsed {
        Ok(Value::Array(items)) => ListOutcome::Lines(items.iter().map(render_line).collect()),
        Ok(other) => ListOutcome::NotAList(other),
        Err(e) => ListOutcome::Failed(e.to_string()),
    }
}

/// Render one record as `"<name>: <feedback>"`.
///
/// Missing keys render as `undefined` and nulls as `null`, matching how the
/// page has always displayed incomplete records.
pub fn render_line(item: &Value) -> String {
    format!("{}: {}", field_text(item, "name"), field_text(item, "feedback"))
}

fn field_text(item: &Value, key: &str) -> String {
    match item.get(key) {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// Empty strings, null, false and zero fall back to the default message.
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_renders_lines_in_order() {
        let body = r#"[
            {"id":1,"name":"Alice","feedback":"Great!"},
            {"id":2,"name":"Bob","feedback":"Meh"}
        ]"#;
        assert_eq!(
            interpret_list_response(true, body),
            ListOutcome::Lines(vec!["Alice: Great!".to_string(), "Bob: Meh".to_string()])
        );
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(
            interpret_list_response(true, "[]"),
            ListOutcome::Lines(Vec::new())
        );
    }

    #[test]
    fn test_object_is_not_a_list() {
        let outcome = interpret_list_response(true, r#"{"rows":[]}"#);
        assert_eq!(
            outcome,
            ListOutcome::NotAList(serde_json::json!({"rows": []}))
        );
    }

    #[test]
    fn test_error_status_uses_message() {
        let outcome = interpret_list_response(false, r#"{"message":"Error retrieving feedbacks"}"#);
        assert_eq!(
            outcome,
            ListOutcome::Failed("Error retrieving feedbacks".to_string())
        );
    }

    #[test]
    fn test_error_status_without_message_falls_back() {
        assert_eq!(
            interpret_list_response(false, "{}"),
            ListOutcome::Failed(FETCH_FAILED.to_string())
        );
        assert_eq!(
            interpret_list_response(false, r#"{"message":""}"#),
            ListOutcome::Failed(FETCH_FAILED.to_string())
        );
    }

    #[test]
    fn test_unparsable_body_fails() {
        assert!(matches!(
            interpret_list_response(true, "<html>"),
            ListOutcome::Failed(_)
        ));
        assert!(matches!(
            interpret_list_response(false, "Bad Gateway"),
            ListOutcome::Failed(_)
        ));
    }

    #[test]
    fn test_render_line_incomplete_record() {
        let item = serde_json::json!({"id": 4, "name": null});
        assert_eq!(render_line(&item), "null: undefined");
    }

    #[test]
    fn test_error_line() {
        assert_eq!(ListOutcome::error_line("boom"), "Error: boom");
    }
}
