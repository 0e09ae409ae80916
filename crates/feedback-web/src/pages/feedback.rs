//! Feedback Page
//!
//! Submission form plus the list of everything submitted so far.

use crate::api;
use crate::components::FeedbackList;
use feedback_types::{FeedbackForm, ListOutcome, SubmitOutcome};
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub enum FeedbackMsg {
    NameChanged(String),
    FeedbackChanged(String),
    Submit,
    Submitted(SubmitOutcome),
    Load,
    Loaded(ListOutcome),
}

pub struct FeedbackPage {
    form: FeedbackForm,
    lines: Vec<String>,
}

impl Component for FeedbackPage {
    type Message = FeedbackMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(FeedbackMsg::Load);

        Self {
            form: FeedbackForm::default(),
            lines: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FeedbackMsg::NameChanged(name) => {
                self.form.name = name;
                true
            }
            FeedbackMsg::FeedbackChanged(feedback) => {
                self.form.feedback = feedback;
                true
            }
            FeedbackMsg::Submit => {
                let request = self.form.request();

                ctx.link().send_future(async move {
                    let outcome = match api::submit_feedback(&request).await {
                        Ok(reply) => SubmitOutcome::Status(reply.status),
                        Err(e) => SubmitOutcome::Failed(e),
                    };
                    FeedbackMsg::Submitted(outcome)
                });

                false
            }
            FeedbackMsg::Submitted(outcome) => {
                let after = self.form.finish_submit(&outcome);
                if let Some(warning) = after.warning {
                    log::warn!("{}", warning);
                }
                if after.reload_list {
                    ctx.link().send_message(FeedbackMsg::Load);
                }
                true
            }
            FeedbackMsg::Load => {
                ctx.link()
                    .send_future(async { FeedbackMsg::Loaded(api::load_feedbacks().await) });
                false
            }
            FeedbackMsg::Loaded(outcome) => match outcome {
                ListOutcome::Lines(lines) => {
                    self.lines = lines;
                    true
                }
                ListOutcome::NotAList(data) => {
                    log::error!("Received data is not an array: {}", data);
                    false
                }
                ListOutcome::Failed(message) => {
                    log::error!("Error loading feedbacks: {}", message);
                    self.lines = vec![ListOutcome::error_line(&message)];
                    true
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_name_input = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            FeedbackMsg::NameChanged(input.value())
        });

        let on_feedback_input = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            FeedbackMsg::FeedbackChanged(input.value())
        });

        let on_submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            FeedbackMsg::Submit
        });

        html! {
            <div class="container">
                <h1>{ "Feedback" }</h1>

                <form id="feedbackForm" onsubmit={on_submit}>
                    <div class="form-group">
                        <input
                            id="name"
                            type="text"
                            placeholder="Your name"
                            value={self.form.name.clone()}
                            oninput={on_name_input}
                        />
                    </div>

                    <div class="form-group">
                        <input
                            id="feedback"
                            type="text"
                            placeholder="Your feedback"
                            value={self.form.feedback.clone()}
                            oninput={on_feedback_input}
                        />
                    </div>

                    <button type="submit" class="btn-primary">{ "Submit" }</button>
                </form>

                <h2>{ "All Feedback" }</h2>
                <FeedbackList lines={self.lines.clone()} />
            </div>
        }
    }
}
