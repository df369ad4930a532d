// Three price fields and the Predict button.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::SubmissionOutcome;

use crate::state::app_state::AppState;

#[component]
pub fn PriceForm() -> Element {
    let state = use_context::<AppState>();
    let mut open = use_signal(|| "0.00".to_string());
    let mut high = use_signal(|| "0.00".to_string());
    let mut low = use_signal(|| "0.00".to_string());
    let mut outcome = use_signal(|| None::<SubmissionOutcome>);

    let result_view = match outcome() {
        Some(SubmissionOutcome::Predicted { display, .. }) => rsx! {
            div {
                class: "result-box",
                "📈 Predicted Closing Price: "
                br {}
                span { class: "result-value", "{display}" }
            }
        },
        Some(SubmissionOutcome::Rejected { class, message }) => {
            let label = class.label();
            rsx! {
                div { class: "error-box", "❌ {label}: {message}" }
            }
        }
        None => None,
    };

    rsx! {
        div {
            class: "card",
            div {
                class: "fields",
                label {
                    "Open Price"
                    input {
                        r#type: "number",
                        min: "0",
                        step: "0.01",
                        value: "{open}",
                        oninput: move |evt| open.set(evt.value()),
                    }
                }
                label {
                    "High Price"
                    input {
                        r#type: "number",
                        min: "0",
                        step: "0.01",
                        value: "{high}",
                        oninput: move |evt| high.set(evt.value()),
                    }
                }
                label {
                    "Low Price"
                    input {
                        r#type: "number",
                        min: "0",
                        step: "0.01",
                        value: "{low}",
                        oninput: move |evt| low.set(evt.value()),
                    }
                }
            }
            button {
                class: "predict-btn",
                onclick: move |_| {
                    let result = state.submit(open.read().as_str(), high.read().as_str(), low.read().as_str());
                    outcome.set(Some(result));
                },
                "🔮 Predict"
            }
        }
        {result_view}
    }
}
