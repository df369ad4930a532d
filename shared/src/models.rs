use serde::{Deserialize, Serialize};

/// Column names of the feature record, in the order the model expects them.
pub const FEATURE_COLUMNS: [&str; 3] = ["Open", "High", "Low"];

/// Raw prices as typed into the form, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceInput {
    pub open: f64,
    pub high: f64,
    pub low: f64,
}

impl PriceInput {
    pub fn new(open: f64, high: f64, low: f64) -> Self {
        Self { open, high, low }
    }

    /// Field labels paired with their values, in form order.
    pub fn labelled(&self) -> [(&'static str, f64); 3] {
        [("Open", self.open), ("High", self.high), ("Low", self.low)]
    }
}

/// True for prices a feature record accepts: finite and strictly positive.
pub fn is_valid_price(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// A single validated row of model inputs. Fields are private so every
/// record holds finite, strictly positive prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureRecord {
    open: f64,
    high: f64,
    low: f64,
}

impl FeatureRecord {
    /// `None` unless every price passes `is_valid_price`.
    pub fn try_new(open: f64, high: f64, low: f64) -> Option<Self> {
        if [open, high, low].iter().all(|v| is_valid_price(*v)) {
            Some(Self { open, high, low })
        } else {
            None
        }
    }

    /// Values ordered as `FEATURE_COLUMNS`.
    pub fn values(&self) -> [f64; 3] {
        [self.open, self.high, self.low]
    }
}

/// A bounded, column-restricted slice of the historical dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl PreviewTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// User-facing failure classes. Every error shown to the user names one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorClass {
    FileNotFound,
    SchemaMismatch,
    Deserialization,
    InvalidInput,
    PredictionFailed,
}

impl ErrorClass {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorClass::FileNotFound => "File not found",
            ErrorClass::SchemaMismatch => "Schema mismatch",
            ErrorClass::Deserialization => "Model deserialization failed",
            ErrorClass::InvalidInput => "Invalid input",
            ErrorClass::PredictionFailed => "Prediction failed",
        }
    }
}

/// What a front end renders after one form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    Predicted { value: f64, display: String },
    Rejected { class: ErrorClass, message: String },
}

impl SubmissionOutcome {
    pub fn is_predicted(&self) -> bool {
        matches!(self, SubmissionOutcome::Predicted { .. })
    }

    /// Full line shown to the user, e.g. `Predicted Closing Price: $70.45`.
    pub fn headline(&self) -> String {
        match self {
            SubmissionOutcome::Predicted { display, .. } => {
                format!("Predicted Closing Price: {}", display)
            }
            SubmissionOutcome::Rejected { class, message } => {
                format!("{}: {}", class.label(), message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_record_orders_open_high_low() {
        let record = FeatureRecord::try_new(1.0, 2.0, 3.0).unwrap();
        assert_eq!(record.values(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn feature_record_refuses_non_positive_prices() {
        assert!(FeatureRecord::try_new(0.0, 2.0, 3.0).is_none());
        assert!(FeatureRecord::try_new(1.0, -2.0, 3.0).is_none());
        assert!(FeatureRecord::try_new(1.0, 2.0, f64::NAN).is_none());
        assert!(FeatureRecord::try_new(f64::INFINITY, 2.0, 3.0).is_none());
    }

    #[test]
    fn headline_for_prediction() {
        let outcome = SubmissionOutcome::Predicted { value: 70.45, display: "$70.45".to_string() };
        assert!(outcome.is_predicted());
        assert_eq!(outcome.headline(), "Predicted Closing Price: $70.45");
    }

    #[test]
    fn headline_for_rejection_names_the_class() {
        let outcome = SubmissionOutcome::Rejected {
            class: ErrorClass::InvalidInput,
            message: "All prices must be greater than zero.".to_string(),
        };
        assert!(!outcome.is_predicted());
        assert!(outcome.headline().starts_with("Invalid input"));
    }
}
