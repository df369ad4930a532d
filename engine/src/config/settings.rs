// Application settings, loaded from a JSON file when one is present.
use crate::data::dataset::DEFAULT_PREVIEW_ROWS;
use crate::error::EngineError;
use serde::Deserialize;
use shared::models::FEATURE_COLUMNS;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/settings.json";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub data_path: PathBuf,
    pub model_path: PathBuf,
    pub required_columns: Vec<String>,
    pub preview_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            data_path: PathBuf::from("data/Crude Oil WTI Futures Historical Data.csv"),
            model_path: PathBuf::from("Model/svm_model.json"),
            required_columns: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl Settings {
    /// Reads settings from `path`. A missing file means defaults; a file that
    /// exists but cannot be parsed is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "No settings file, using defaults");
            return Ok(Settings::default());
        }

        let text = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&text).map_err(|e| {
            EngineError::ConfigError(format!("Invalid settings file '{}': {}", path.display(), e))
        })?;
        tracing::info!(
            path = %path.display(),
            data_path = %settings.data_path.display(),
            model_path = %settings.model_path.display(),
            "Loaded settings"
        );
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load_or_default("definitely/not/here.json").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.required_columns, vec!["Open", "High", "Low"]);
        assert_eq!(settings.preview_rows, 4);
    }

    #[test]
    fn test_partial_file_falls_back_per_field() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "model_path": "models/linear.json", "preview_rows": 2 }}"#).unwrap();
        let settings = Settings::load_or_default(file.path()).unwrap();
        assert_eq!(settings.model_path, PathBuf::from("models/linear.json"));
        assert_eq!(settings.preview_rows, 2);
        assert_eq!(settings.data_path, Settings::default().data_path);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();
        let err = Settings::load_or_default(file.path()).unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
        assert!(err.to_string().contains("Invalid settings file"));
    }
}
