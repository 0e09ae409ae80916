//! Submission form state and what happens after a submit
//!
//! Like [`crate::listing`], this holds no browser APIs so the page's
//! behaviour can be checked on the host.

use crate::NewFeedback;

/// How a create request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server answered with this HTTP status
    Status(u16),
    /// The request never got an answer
    Failed(String),
}

/// What the page does once a create request has ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfterSubmit {
    pub reload_list: bool,
    /// Something worth logging about the create request, if anything
    pub warning: Option<String>,
}

/// Current text of the two inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub name: String,
    pub feedback: String,
}

impl FeedbackForm {
    /// The request body for the current inputs, sent as typed
    pub fn request(&self) -> NewFeedback {
        NewFeedback::new(self.name.clone(), self.feedback.clone())
    }

    /// Clear both inputs and ask for a list reload, whatever the outcome.
    pub fn finish_submit(&mut self, outcome: &SubmitOutcome) -> AfterSubmit {
        self.name.clear();
        self.feedback.clear();

        let warning = match outcome {
            SubmitOutcome::Status(status) if (200..300).contains(status) => None,
            SubmitOutcome::Status(status) => {
                Some(format!("Feedback submit returned status {}", status))
            }
            SubmitOutcome::Failed(e) => Some(format!("Feedback submit failed: {}", e)),
        };

        AfterSubmit {
            reload_list: true,
            warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FeedbackForm {
        FeedbackForm {
            name: "Alice".to_string(),
            feedback: "Great!".to_string(),
        }
    }

    #[test]
    fn test_request_sends_inputs_untouched() {
        let form = FeedbackForm {
            name: "  Alice ".to_string(),
            feedback: String::new(),
        };
        let req = form.request();
        assert_eq!(req.name.as_deref(), Some("  Alice "));
        assert_eq!(req.feedback.as_deref(), Some(""));
    }

    #[test]
    fn test_success_clears_and_reloads() {
        let mut form = filled();
        let after = form.finish_submit(&SubmitOutcome::Status(201));
        assert_eq!(form, FeedbackForm::default());
        assert!(after.reload_list);
        assert_eq!(after.warning, None);
    }

    #[test]
    fn test_server_error_still_clears_and_reloads() {
        let mut form = filled();
        let after = form.finish_submit(&SubmitOutcome::Status(500));
        assert_eq!(form, FeedbackForm::default());
        assert!(after.reload_list);
        assert!(after.warning.unwrap().contains("500"));
    }

    #[test]
    fn test_network_failure_still_clears_and_reloads() {
        let mut form = filled();
        let after = form.finish_submit(&SubmitOutcome::Failed("offline".to_string()));
        assert_eq!(form, FeedbackForm::default());
        assert!(after.reload_list);
        assert!(after.warning.unwrap().contains("offline"));
    }
}
