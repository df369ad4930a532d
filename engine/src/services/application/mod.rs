// Orchestration: loads the dataset and model once, then handles one form
// submission at a time against those immutable artifacts.
use crate::config::settings::Settings;
use crate::data::dataset::{DataLoader, HistoricalDataset, DEFAULT_PREVIEW_ROWS};
use crate::error::EngineError;
use crate::predictor::{ModelLoader, Predictor};
use shared::models::{PreviewTable, PriceInput, SubmissionOutcome};
use std::sync::Arc;
use tracing::{error, info, warn};

pub mod render_outcome;
pub mod validate_input;

pub use validate_input::{parse_price_input, validate_input};

/// Result of startup. `Failed` is terminal: front ends show the error and
/// render nothing else.
pub enum AppStatus {
    Ready(Application),
    Failed(EngineError),
}

#[derive(Clone)]
pub struct Application {
    dataset: Arc<HistoricalDataset>,
    predictor: Arc<dyn Predictor>,
    preview_rows: usize,
}

impl Application {
    pub fn new(dataset: Arc<HistoricalDataset>, predictor: Arc<dyn Predictor>) -> Self {
        Application { dataset, predictor, preview_rows: DEFAULT_PREVIEW_ROWS }
    }

    pub fn with_preview_rows(mut self, preview_rows: usize) -> Self {
        self.preview_rows = preview_rows;
        self
    }

    pub fn bootstrap(settings: &Settings) -> AppStatus {
        match Self::try_bootstrap(settings) {
            Ok(app) => {
                info!(
                    rows = app.dataset.len(),
                    model = app.predictor.name(),
                    "Application ready"
                );
                AppStatus::Ready(app)
            }
            Err(e) => {
                error!(error = %e, class = ?e.class(), "Startup failed");
                AppStatus::Failed(e)
            }
        }
    }

    fn try_bootstrap(settings: &Settings) -> Result<Self, EngineError> {
        let dataset = DataLoader::load(&settings.data_path, settings.required_columns.as_slice())?;
        let predictor = ModelLoader::load(&settings.model_path)?;
        Ok(Self::new(Arc::new(dataset), predictor).with_preview_rows(settings.preview_rows))
    }

    pub fn dataset(&self) -> &HistoricalDataset {
        &self.dataset
    }

    pub fn preview(&self) -> PreviewTable {
        self.dataset.preview(self.preview_rows)
    }

    /// Validates the input and runs the model. Invalid input never reaches
    /// the predictor.
    pub fn predict(&self, input: PriceInput) -> Result<f64, EngineError> {
        let span = tracing::info_span!("submission", open = input.open, high = input.high, low = input.low);
        let _enter = span.enter();

        tracing::debug!(phase = "validating");
        let record = validate_input(&input).map_err(|e| {
            warn!(error = %e, "Rejected form input");
            e
        })?;

        tracing::debug!(
            phase = "predicting",
            model = self.predictor.name(),
            features = ?record.values()
        );
        let value = self.predictor.predict(&record).map_err(|e| match e {
            EngineError::Prediction(_) => e,
            other => EngineError::Prediction(other.to_string()),
        });
        match &value {
            Ok(v) => tracing::debug!(phase = "displaying", value = *v),
            Err(e) => error!(error = %e, "Model failed on a valid input"),
        }
        value
    }

    /// Handles one submission end to end. Never panics and never returns a
    /// fatal error; the loaded artifacts are untouched either way.
    pub fn submit(&self, input: PriceInput) -> SubmissionOutcome {
        match self.predict(input) {
            Ok(value) => render_outcome::predicted(value),
            Err(e) => render_outcome::rejected(&e),
        }
    }

    /// Like `submit`, starting from the raw text of the three form fields.
    pub fn submit_raw(&self, open: &str, high: &str, low: &str) -> SubmissionOutcome {
        match parse_price_input(open, high, low) {
            Ok(input) => self.submit(input),
            Err(e) => {
                warn!(error = %e, "Unparseable form input");
                render_outcome::rejected(&e)
            }
        }
    }
}
