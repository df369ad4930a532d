use crate::error::EngineError;
use crate::predictor::artifact::{ArtifactModel, ModelArtifact};
use crate::predictor::Predictor;
use std::fs;
use std::path::Path;
use std::sync::Arc;

pub struct ModelLoader;

impl ModelLoader {
    /// Loads and validates the artifact at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Arc<dyn Predictor>, EngineError> {
        let model = Self::load_artifact(path)?;
        Ok(Arc::new(model))
    }

    pub fn load_artifact(path: impl AsRef<Path>) -> Result<ArtifactModel, EngineError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(EngineError::NotFound { what: "Model", path: path.to_path_buf() });
        }

        let bytes = fs::read(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "model".to_string());
        let model = Self::from_slice(&bytes, name)?;

        tracing::info!(
            path = %path.display(),
            kind = model.model().kind(),
            features = model.n_features(),
            "Loaded model artifact"
        );
        Ok(model)
    }

    pub fn from_slice(bytes: &[u8], name: impl Into<String>) -> Result<ArtifactModel, EngineError> {
        let artifact: ModelArtifact = serde_json::from_slice(bytes)
            .map_err(|e| EngineError::Deserialization(e.to_string()))?;
        artifact.into_model(name)
    }
}
