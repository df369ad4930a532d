// Engine library root
// Loading of the historical dataset and model artifact, plus the
// orchestration that serves form submissions against them.

pub mod config;
pub mod data;
pub mod error;
pub mod predictor;
pub mod services;

pub use error::EngineError;
pub use services::application::{AppStatus, Application};
