#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::{PriceForm, SnapshotTable};
use crate::config::theme::ThemePalette;
use crate::state::app_state::AppState;

#[component]
pub fn App() -> Element {
    let state = use_context::<AppState>();
    let stylesheet = ThemePalette::default().stylesheet();

    // A failed startup renders the error and nothing else.
    let body = match (state.startup_error(), state.preview()) {
        (Some(error), _) => rsx! {
            div { class: "error-box", "❗ {error}" }
        },
        (None, Some(table)) => rsx! {
            h3 { class: "section-title", "📊 Recent Market Snapshot" }
            SnapshotTable { table: table }
            h3 { class: "section-title", "🧾 Enter Today's Price Data" }
            PriceForm {}
        },
        (None, None) => None,
    };

    rsx! {
        style { "{stylesheet}" }
        h1 { class: "main-title", "🛢️ Oil Price Predictor" }
        {body}
    }
}
