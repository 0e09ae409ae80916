//! UI components

pub mod feedback_list;

pub use feedback_list::FeedbackList;
