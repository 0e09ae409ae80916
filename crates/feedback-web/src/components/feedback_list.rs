//! Feedback list component

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeedbackListProps {
    pub lines: Vec<String>,
}

#[function_component(FeedbackList)]
pub fn feedback_list(props: &FeedbackListProps) -> Html {
    html! {
        <ul id="feedbackList" class="feedback-list">
            { for props.lines.iter().enumerate().map(|(index, line)| {
                html! {
                    <li key={index}>{ line }</li>
                }
            }) }
        </ul>
    }
}
