//! Calls to the feedback API

use feedback_types::{interpret_list_response, ListOutcome, NewFeedback, API_BASE_PATH};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ProgressEvent, XmlHttpRequest};

/// Status and body of a finished request
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn feedback_url() -> String {
    format!("{}/feedback", API_BASE_PATH)
}

/// POST a new record. The reply is returned but the page does not act on it.
pub async fn submit_feedback(feedback: &NewFeedback) -> Result<HttpReply, String> {
    let body = serde_json::to_string(feedback).map_err(|e| format!("JSON error: {}", e))?;
    send("POST", &feedback_url(), Some(&body)).await
}

/// GET the list and decide what the page should show.
pub async fn load_feedbacks() -> ListOutcome {
    match send("GET", &feedback_url(), None).await {
        Ok(reply) => interpret_list_response(reply.is_success(), &reply.body),
        Err(e) => ListOutcome::Failed(e),
    }
}

async fn send(method: &str, url: &str, body: Option<&str>) -> Result<HttpReply, String> {
    let request = XmlHttpRequest::new().map_err(|e| format!("XHR error: {:?}", e))?;

    request
        .open(method, url)
        .map_err(|e| format!("Open error: {:?}", e))?;
    if body.is_some() {
        request
            .set_request_header("Content-Type", "application/json")
            .map_err(|e| format!("Header error: {:?}", e))?;
    }

    let (sender, receiver) = futures::channel::oneshot::channel::<()>();

    // loadend fires after success, error and abort alike
    let onloadend = Closure::once_into_js(move |_e: ProgressEvent| {
        let _ = sender.send(());
    });
    request.set_onloadend(Some(onloadend.unchecked_ref()));

    request
        .send_with_opt_str(body)
        .map_err(|e| format!("Send error: {:?}", e))?;

    receiver
        .await
        .map_err(|e| format!("Response error: {:?}", e))?;

    let status = request
        .status()
        .map_err(|e| format!("Status error: {:?}", e))?;
    if status == 0 {
        return Err("NetworkError when attempting to fetch resource.".to_string());
    }

    let body = request
        .response_text()
        .map_err(|e| format!("Text error: {:?}", e))?
        .unwrap_or_default();

    Ok(HttpReply { status, body })
}
