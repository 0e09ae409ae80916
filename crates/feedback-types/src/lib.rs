//! Feedback Types - Pure type definitions for WASM compatibility
//!
//! This crate contains only pure data types with no async runtime dependencies,
//! making it usable from both the API server and the browser client.

pub mod feedback;
pub mod form;
pub mod listing;

pub use feedback::*;
pub use form::{AfterSubmit, FeedbackForm, SubmitOutcome};
pub use listing::{interpret_list_response, render_line, ListOutcome};

/// Base path the browser client prefixes to every API call
pub const API_BASE_PATH: &str = "/api";

/// Fixed response messages shared by server and client
pub mod messages {
    pub const BACKEND_RUNNING: &str = "Backend is running";
    pub const FEEDBACK_RECEIVED: &str = "Feedback received successfully";
    pub const SAVE_FAILED: &str = "Error saving feedback";
    pub const LIST_FAILED: &str = "Error retrieving feedbacks";
    pub const FETCH_FAILED: &str = "Failed to fetch feedbacks";
    pub const MALFORMED_BODY: &str = "Malformed JSON body";
}
