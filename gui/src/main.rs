// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
// Desktop specific imports for Dioxus
use dioxus_desktop::{Config as DesktopConfig, WindowBuilder};

use engine::config::settings::{Settings, DEFAULT_CONFIG_PATH};
use engine::{AppStatus, Application};

mod app;
mod components;
mod config;
mod state; // Application state module

use app::App;
use state::app_state::AppState;

fn main() {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Oil Price Predictor GUI (Dioxus Desktop)...");

    // Load the dataset and model once; a failure here is shown in place of the form.
    let status = Settings::load_or_default(DEFAULT_CONFIG_PATH)
        .map(|settings| Application::bootstrap(&settings))
        .unwrap_or_else(AppStatus::Failed);
    let app_state = AppState::from(status);

    let desktop_config = DesktopConfig::default()
        .with_window(WindowBuilder::new().with_title(config::WINDOW_TITLE));

    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_state)
        .launch(App);
}
