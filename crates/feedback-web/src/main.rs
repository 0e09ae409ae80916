//! Feedback Web Frontend
//!
//! A Yew-based page for submitting and browsing feedback.

use yew::prelude::*;

mod api;
mod components;
mod pages;

use pages::FeedbackPage;

#[function_component(App)]
fn app() -> Html {
    html! { <FeedbackPage /> }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
