//! JSON model artifacts.
//!
//! An artifact is a regression model trained elsewhere and exported as:
//!
//! ```json
//! { "format_version": 1,
//!   "model": { "kind": "linear", "intercept": 0.1, "coefficients": [0.2, 0.5, 0.3] },
//!   "scaler": { "mean": [70.0, 71.0, 69.0], "scale": [5.0, 5.0, 5.0] } }
//! ```
//!
//! `kind` is either `linear` or `svr` (epsilon-SVR with a linear, rbf or
//! poly kernel). The optional `scaler` standardises inputs before the model
//! sees them.

use crate::error::EngineError;
use crate::predictor::Predictor;
use serde::Deserialize;
use shared::models::FeatureRecord;

pub const SUPPORTED_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub model: ModelSpec,
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    Linear {
        intercept: f64,
        coefficients: Vec<f64>,
    },
    Svr {
        kernel: Kernel,
        support_vectors: Vec<Vec<f64>>,
        dual_coef: Vec<f64>,
        intercept: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Kernel {
    Linear,
    Rbf { gamma: f64 },
    Poly { gamma: f64, coef0: f64, degree: u32 },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

impl Kernel {
    fn apply(&self, sv: &[f64], x: &[f64]) -> f64 {
        match self {
            Kernel::Linear => dot(sv, x),
            Kernel::Rbf { gamma } => {
                let dist2: f64 = sv.iter().zip(x.iter()).map(|(a, b)| (a - b) * (a - b)).sum();
                (-gamma * dist2).exp()
            }
            Kernel::Poly { gamma, coef0, degree } => {
                // Degree is bounded to i32 when the artifact is validated.
                let exponent = i32::try_from(*degree).unwrap_or(i32::MAX);
                (gamma * dot(sv, x) + coef0).powi(exponent)
            }
        }
    }

    fn is_valid(&self) -> bool {
        match self {
            Kernel::Linear => true,
            Kernel::Rbf { gamma } => gamma.is_finite() && *gamma > 0.0,
            Kernel::Poly { gamma, coef0, degree } => {
                gamma.is_finite() && coef0.is_finite() && *degree > 0 && i32::try_from(*degree).is_ok()
            }
        }
    }
}

impl ModelSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            ModelSpec::Linear { .. } => "linear",
            ModelSpec::Svr { .. } => "svr",
        }
    }

    /// Number of features expected in input.
    pub fn n_features(&self) -> usize {
        match self {
            ModelSpec::Linear { coefficients, .. } => coefficients.len(),
            ModelSpec::Svr { support_vectors, .. } => support_vectors.first().map_or(0, Vec::len),
        }
    }

    fn check(&self) -> Result<(), String> {
        match self {
            ModelSpec::Linear { intercept, coefficients } => {
                if coefficients.is_empty() {
                    return Err("linear model has no coefficients".to_string());
                }
                if !intercept.is_finite() || !all_finite(coefficients) {
                    return Err("linear model has non-finite parameters".to_string());
                }
            }
            ModelSpec::Svr { kernel, support_vectors, dual_coef, intercept } => {
                if support_vectors.is_empty() {
                    return Err("svr model has no support vectors".to_string());
                }
                if support_vectors.len() != dual_coef.len() {
                    return Err(format!(
                        "svr model has {} support vectors but {} dual coefficients",
                        support_vectors.len(),
                        dual_coef.len()
                    ));
                }
                let width = self.n_features();
                if width == 0 || support_vectors.iter().any(|sv| sv.len() != width) {
                    return Err("svr support vectors must share one non-zero width".to_string());
                }
                if !kernel.is_valid() {
                    return Err(format!("invalid kernel parameters: {:?}", kernel));
                }
                if !intercept.is_finite()
                    || !all_finite(dual_coef)
                    || support_vectors.iter().any(|sv| !all_finite(sv))
                {
                    return Err("svr model has non-finite parameters".to_string());
                }
            }
        }
        Ok(())
    }

    fn evaluate(&self, x: &[f64]) -> f64 {
        match self {
            ModelSpec::Linear { intercept, coefficients } => intercept + dot(coefficients, x),
            ModelSpec::Svr { kernel, support_vectors, dual_coef, intercept } => {
                intercept
                    + support_vectors
                        .iter()
                        .zip(dual_coef.iter())
                        .map(|(sv, coef)| coef * kernel.apply(sv, x))
                        .sum::<f64>()
            }
        }
    }
}

impl StandardScaler {
    fn check(&self, width: usize) -> Result<(), String> {
        if self.mean.len() != width || self.scale.len() != width {
            return Err(format!(
                "scaler expects {} mean and scale values, got {} and {}",
                width,
                self.mean.len(),
                self.scale.len()
            ));
        }
        if !all_finite(&self.mean) || !all_finite(&self.scale) || self.scale.iter().any(|s| *s == 0.0) {
            return Err("scaler has zero or non-finite parameters".to_string());
        }
        Ok(())
    }

    fn transform(&self, x: &[f64]) -> Vec<f64> {
        x.iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(v, (m, s))| (v - m) / s)
            .collect()
    }
}

impl ModelArtifact {
    /// Checks the decoded artifact is usable and turns it into a predictor.
    pub fn into_model(self, name: impl Into<String>) -> Result<ArtifactModel, EngineError> {
        if self.format_version != SUPPORTED_FORMAT_VERSION {
            return Err(EngineError::Deserialization(format!(
                "unsupported artifact format version {} (expected {})",
                self.format_version, SUPPORTED_FORMAT_VERSION
            )));
        }
        self.model.check().map_err(EngineError::Deserialization)?;
        if let Some(scaler) = &self.scaler {
            scaler.check(self.model.n_features()).map_err(EngineError::Deserialization)?;
        }

        Ok(ArtifactModel {
            name: name.into(),
            model: self.model,
            scaler: self.scaler,
        })
    }
}

/// A validated artifact, ready to predict.
#[derive(Debug, Clone)]
pub struct ArtifactModel {
    name: String,
    model: ModelSpec,
    scaler: Option<StandardScaler>,
}

impl ArtifactModel {
    pub fn model(&self) -> &ModelSpec {
        &self.model
    }

    pub fn n_features(&self) -> usize {
        self.model.n_features()
    }

    pub fn predict_values(&self, x: &[f64]) -> Result<f64, EngineError> {
        if x.len() != self.n_features() {
            return Err(EngineError::Prediction(format!(
                "{} model expects {} features, got {}",
                self.model.kind(),
                self.n_features(),
                x.len()
            )));
        }

        let value = match &self.scaler {
            Some(scaler) => self.model.evaluate(&scaler.transform(x)),
            None => self.model.evaluate(x),
        };
        if !value.is_finite() {
            return Err(EngineError::Prediction(format!("model produced a non-finite value ({})", value)));
        }
        Ok(value)
    }
}

impl Predictor for ArtifactModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, features: &FeatureRecord) -> Result<f64, EngineError> {
        self.predict_values(&features.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<ArtifactModel, EngineError> {
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        artifact.into_model("test")
    }

    fn record(open: f64, high: f64, low: f64) -> FeatureRecord {
        FeatureRecord::try_new(open, high, low).unwrap()
    }

    #[test]
    fn test_linear_prediction() {
        let model = parse(r#"{"format_version":1,"model":{"kind":"linear","intercept":1.0,"coefficients":[0.5,0.25,0.25]}}"#).unwrap();
        assert_eq!(model.name(), "test");
        assert_eq!(model.n_features(), 3);
        let value = model.predict(&record(70.0, 72.0, 68.0)).unwrap();
        assert!((value - 71.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_with_scaler() {
        let model = parse(
            r#"{"format_version":1,
                "model":{"kind":"linear","intercept":70.0,"coefficients":[1.0,0.0,0.0]},
                "scaler":{"mean":[60.0,0.0,0.0],"scale":[10.0,1.0,1.0]}}"#,
        )
        .unwrap();
        // (80 - 60) / 10 = 2 -> 70 + 2
        let value = model.predict(&record(80.0, 1.0, 1.0)).unwrap();
        assert!((value - 72.0).abs() < 1e-9);
    }

    #[test]
    fn test_svr_rbf_at_support_vector() {
        let model = parse(
            r#"{"format_version":1,"model":{"kind":"svr","kernel":{"type":"rbf","gamma":0.5},
                "support_vectors":[[1.0,1.0,1.0],[3.0,3.0,3.0]],"dual_coef":[2.0,-1.0],"intercept":10.0}}"#,
        )
        .unwrap();
        // K(sv0, sv0) = 1, K(sv1, sv0) = exp(-0.5 * 12)
        let expected = 10.0 + 2.0 - (-6.0f64).exp();
        let value = model.predict(&record(1.0, 1.0, 1.0)).unwrap();
        assert!((value - expected).abs() < 1e-12);
    }

    #[test]
    fn test_svr_linear_and_poly_kernels() {
        let linear = parse(
            r#"{"format_version":1,"model":{"kind":"svr","kernel":{"type":"linear"},
                "support_vectors":[[1.0,0.0,0.0]],"dual_coef":[3.0],"intercept":1.0}}"#,
        )
        .unwrap();
        assert!((linear.predict(&record(2.0, 5.0, 5.0)).unwrap() - 7.0).abs() < 1e-9);

        let poly = parse(
            r#"{"format_version":1,"model":{"kind":"svr","kernel":{"type":"poly","gamma":1.0,"coef0":1.0,"degree":2},
                "support_vectors":[[1.0,0.0,0.0]],"dual_coef":[1.0],"intercept":0.0}}"#,
        )
        .unwrap();
        // (1 * 2 + 1)^2
        assert!((poly.predict(&record(2.0, 9.0, 9.0)).unwrap() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_feature_count_mismatch_is_prediction_error() {
        let model = parse(r#"{"format_version":1,"model":{"kind":"linear","intercept":0.0,"coefficients":[1.0,2.0]}}"#).unwrap();
        let err = model.predict(&record(1.0, 2.0, 3.0)).unwrap_err();
        assert!(matches!(err, EngineError::Prediction(_)));
        assert!(err.to_string().contains("expects 2 features, got 3"));
    }

    #[test]
    fn test_overflow_is_prediction_error() {
        let model = parse(r#"{"format_version":1,"model":{"kind":"linear","intercept":0.0,"coefficients":[1e308,1e308,1e308]}}"#).unwrap();
        let err = model.predict(&record(10.0, 10.0, 10.0)).unwrap_err();
        assert!(matches!(err, EngineError::Prediction(_)));
    }

    #[test]
    fn test_inconsistent_artifacts_are_rejected() {
        let cases = [
            r#"{"format_version":2,"model":{"kind":"linear","intercept":0.0,"coefficients":[1.0]}}"#,
            r#"{"format_version":1,"model":{"kind":"linear","intercept":0.0,"coefficients":[]}}"#,
            r#"{"format_version":1,"model":{"kind":"svr","kernel":{"type":"linear"},"support_vectors":[[1.0]],"dual_coef":[1.0,2.0],"intercept":0.0}}"#,
            r#"{"format_version":1,"model":{"kind":"svr","kernel":{"type":"rbf","gamma":0.0},"support_vectors":[[1.0]],"dual_coef":[1.0],"intercept":0.0}}"#,
            r#"{"format_version":1,"model":{"kind":"svr","kernel":{"type":"linear"},"support_vectors":[[1.0],[1.0,2.0]],"dual_coef":[1.0,1.0],"intercept":0.0}}"#,
            r#"{"format_version":1,"model":{"kind":"svr","kernel":{"type":"poly","gamma":1.0,"coef0":0.0,"degree":4294967295},"support_vectors":[[1.0]],"dual_coef":[1.0],"intercept":0.0}}"#,
            r#"{"format_version":1,"model":{"kind":"svr","kernel":{"type":"poly","gamma":1.0,"coef0":0.0,"degree":0},"support_vectors":[[1.0]],"dual_coef":[1.0],"intercept":0.0}}"#,
            r#"{"format_version":1,"model":{"kind":"linear","intercept":0.0,"coefficients":[1.0]},"scaler":{"mean":[0.0],"scale":[0.0]}}"#,
            r#"{"format_version":1,"model":{"kind":"linear","intercept":0.0,"coefficients":[1.0,1.0]},"scaler":{"mean":[0.0],"scale":[1.0]}}"#,
        ];
        for json in cases {
            let err = parse(json).unwrap_err();
            assert!(matches!(err, EngineError::Deserialization(_)), "{} -> {:?}", json, err);
        }
    }
}
