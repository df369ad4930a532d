// Historical price data, loaded once at startup and read-only afterwards.
use crate::data::csv_parser::PriceCsvParser;
use crate::error::EngineError;
use shared::models::PreviewTable;
use std::path::{Path, PathBuf};

pub const DEFAULT_PREVIEW_ROWS: usize = 4;

#[derive(Debug, Clone)]
pub struct HistoricalDataset {
    path: PathBuf,
    columns: Vec<String>,
    required_columns: Vec<String>,
    // One entry per data row, values aligned with `required_columns`.
    rows: Vec<Vec<f64>>,
}

impl HistoricalDataset {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every header in the source file, including ignored ones.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn required_columns(&self) -> &[String] {
        &self.required_columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `n` rows restricted to the required columns. Returns fewer
    /// rows when the dataset is shorter; never pads.
    pub fn preview(&self, n: usize) -> PreviewTable {
        PreviewTable {
            columns: self.required_columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    pub fn preview_default(&self) -> PreviewTable {
        self.preview(DEFAULT_PREVIEW_ROWS)
    }
}

pub struct DataLoader;

impl DataLoader {
    pub fn load<S: AsRef<str>>(
        path: impl AsRef<Path>,
        required_columns: &[S],
    ) -> Result<HistoricalDataset, EngineError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(EngineError::NotFound { what: "Data", path: path.to_path_buf() });
        }

        let mut required: Vec<String> = Vec::with_capacity(required_columns.len());
        for name in required_columns.iter().map(|c| c.as_ref().trim()) {
            if !required.iter().any(|c| c == name) {
                required.push(name.to_string());
            }
        }
        if required.is_empty() {
            return Err(EngineError::Schema("At least one required column must be configured".to_string()));
        }

        let parsed = PriceCsvParser::read_columns(path, &required)?;
        if parsed.rows.is_empty() {
            return Err(EngineError::Schema(format!(
                "CSV file '{}' contains no data rows",
                path.display()
            )));
        }

        tracing::info!(
            path = %path.display(),
            rows = parsed.rows.len(),
            columns = %required.join(","),
            "Loaded historical dataset"
        );

        Ok(HistoricalDataset {
            path: path.to_path_buf(),
            columns: parsed.headers,
            required_columns: required,
            rows: parsed.rows,
        })
    }
}
