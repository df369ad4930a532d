use crate::error::EngineError;
use shared::models::SubmissionOutcome;
use shared::utils::format_price;

pub fn predicted(value: f64) -> SubmissionOutcome {
    SubmissionOutcome::Predicted { value, display: format_price(value) }
}

pub fn rejected(err: &EngineError) -> SubmissionOutcome {
    SubmissionOutcome::Rejected { class: err.class(), message: err.to_string() }
}
