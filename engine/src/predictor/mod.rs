// Prediction capability and the loader for on-disk model artifacts.
pub mod artifact;
pub mod loader;

pub use artifact::ArtifactModel;
pub use loader::ModelLoader;

use crate::error::EngineError;
use shared::models::FeatureRecord;

/// Anything that can turn one feature record into a price. The loaded
/// artifact implements this; tests substitute deterministic stubs.
///
/// Implementations do not check that the record's field names match what
/// the model was trained on; that stays the caller's responsibility.
pub trait Predictor: Send + Sync {
    fn name(&self) -> &str;
    fn predict(&self, features: &FeatureRecord) -> Result<f64, EngineError>;
}
