// Global application state for the GUI, provided once through the Dioxus
// root context. It only wraps the outcome of engine startup; per-submission
// state lives in component signals.

use engine::{AppStatus, Application};
use shared::models::{ErrorClass, PreviewTable, SubmissionOutcome};

#[derive(Clone)]
pub enum Startup {
    Ready(Application),
    Failed { class: ErrorClass, message: String },
}

#[derive(Clone)]
pub struct AppState {
    pub startup: Startup,
}

impl From<AppStatus> for AppState {
    fn from(status: AppStatus) -> Self {
        let startup = match status {
            AppStatus::Ready(app) => Startup::Ready(app),
            AppStatus::Failed(e) => Startup::Failed { class: e.class(), message: e.to_string() },
        };
        AppState { startup }
    }
}

impl AppState {
    /// Heading text for a failed startup, `None` once the engine is ready.
    pub fn startup_error(&self) -> Option<String> {
        match &self.startup {
            Startup::Ready(_) => None,
            Startup::Failed { class, message } => Some(format!("{}: {}", class.label(), message)),
        }
    }

    pub fn preview(&self) -> Option<PreviewTable> {
        match &self.startup {
            Startup::Ready(app) => Some(app.preview()),
            Startup::Failed { .. } => None,
        }
    }

    pub fn submit(&self, open: &str, high: &str, low: &str) -> SubmissionOutcome {
        match &self.startup {
            Startup::Ready(app) => app.submit_raw(open, high, low),
            Startup::Failed { class, message } => SubmissionOutcome::Rejected {
                class: *class,
                message: message.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::EngineError;
    use std::path::PathBuf;

    #[test]
    fn failed_startup_exposes_error_and_no_preview() {
        let status = AppStatus::Failed(EngineError::NotFound { what: "Data", path: PathBuf::from("data/prices.csv") });
        let state = AppState::from(status);
        assert_eq!(state.startup_error().as_deref(), Some("File not found: Data file not found: data/prices.csv"));
        assert!(state.preview().is_none());
        assert!(!state.submit("70", "71", "69").is_predicted());
    }
}
