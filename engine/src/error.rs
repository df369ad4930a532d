use shared::models::ErrorClass;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{what} file not found: {}", .path.display())]
    NotFound { what: &'static str, path: PathBuf },

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Failed to load model: {0}")]
    Deserialization(String),

    #[error("{0}")]
    InputValidation(String),

    #[error("Prediction failed: {0}")]
    Prediction(String),

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl EngineError {
    /// The user-facing failure class this error is reported under.
    pub fn class(&self) -> ErrorClass {
        match self {
            EngineError::NotFound { .. } | EngineError::IoError { .. } => ErrorClass::FileNotFound,
            EngineError::Schema(_) | EngineError::CsvSystemError { .. } => ErrorClass::SchemaMismatch,
            EngineError::ConfigError(_) | EngineError::Deserialization(_) => ErrorClass::Deserialization,
            EngineError::InputValidation(_) => ErrorClass::InvalidInput,
            EngineError::Prediction(_) => ErrorClass::PredictionFailed,
        }
    }

    /// Startup errors halt the application; per-submission errors do not.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, EngineError::InputValidation(_) | EngineError::Prediction(_))
    }
}
