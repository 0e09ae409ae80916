//! Page components

pub mod feedback;

pub use feedback::FeedbackPage;
